use crate::core::merge::merge_ranges;
use crate::domain::model::{DateRange, MergedInterval, Tenure};
use crate::domain::ports::ProfileProvider;
use crate::utils::error::Result;
use chrono::Datelike;

/// Calendar-month difference between the interval's endpoints. Only the
/// year and month components are used, so Jan 31 to Feb 1 counts as one
/// month.
pub fn elapsed_months(interval: &MergedInterval) -> u32 {
    let years = interval.end.year() - interval.start.year();
    let months = interval.end.month() as i32 - interval.start.month() as i32;
    // end >= start, so the sum is never negative.
    (years * 12 + months).max(0) as u32
}

impl Tenure {
    /// Total non-overlapping experience covered by `ranges`. No ranges
    /// yields zero months.
    pub fn from_ranges(ranges: &[DateRange]) -> Self {
        let merged = merge_ranges(ranges);
        let total_months: u32 = merged.iter().map(elapsed_months).sum();

        tracing::debug!(
            ranges = ranges.len(),
            merged = merged.len(),
            total_months,
            "Calculated overall experience"
        );

        Tenure::from_months(total_months)
    }
}

/// Resolves every engagement of the profile and sums their merged span.
/// Fails on the first engagement that ends before it starts.
pub fn calculate_overall_experience<P: ProfileProvider + ?Sized>(profile: &P) -> Result<Tenure> {
    let as_of = profile.as_of();
    let ranges = profile
        .engagements()
        .iter()
        .map(|engagement| engagement.date_range(as_of))
        .collect::<Result<Vec<_>>>()?;

    Ok(Tenure::from_ranges(&ranges))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn interval(from: &str, to: &str) -> MergedInterval {
        MergedInterval {
            start: from.parse::<NaiveDate>().unwrap(),
            end: to.parse::<NaiveDate>().unwrap(),
        }
    }

    #[test]
    fn test_elapsed_months_ignores_day_of_month() {
        assert_eq!(elapsed_months(&interval("2020-01-31", "2020-02-01")), 1);
        assert_eq!(elapsed_months(&interval("2020-01-01", "2020-01-31")), 0);
        assert_eq!(elapsed_months(&interval("2020-11-15", "2021-02-14")), 3);
    }

    #[test]
    fn test_elapsed_months_across_years() {
        assert_eq!(elapsed_months(&interval("2020-01-01", "2022-01-01")), 24);
        assert_eq!(elapsed_months(&interval("2020-09-01", "2021-10-31")), 13);
    }

    #[test]
    fn test_empty_ranges_give_zero() {
        assert_eq!(Tenure::from_ranges(&[]).to_string(), "0 years and 0 months");
    }
}
