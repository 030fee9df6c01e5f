use crate::domain::model::{DateRange, MergedInterval};

/// Coalesces overlapping or touching ranges into a minimal disjoint set,
/// ordered by start date.
///
/// A range whose start equals the running interval's end is treated as
/// contiguous and merged.
pub fn merge_ranges(ranges: &[DateRange]) -> Vec<MergedInterval> {
    let mut sorted = ranges.to_vec();
    // `sort_by_key` is stable, so equal starts keep their input order.
    sorted.sort_by_key(DateRange::start);

    let mut merged: Vec<MergedInterval> = Vec::with_capacity(sorted.len());
    for range in sorted {
        match merged.last_mut() {
            Some(current) if range.start() <= current.end => {
                current.end = current.end.max(range.end());
            }
            _ => merged.push(range.into()),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn range(from: &str, to: &str) -> DateRange {
        DateRange::new(from.parse().unwrap(), to.parse().unwrap()).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_input_merges_to_nothing() {
        assert!(merge_ranges(&[]).is_empty());
    }

    #[test]
    fn test_overlapping_ranges_collapse() {
        let merged = merge_ranges(&[
            range("2021-01-01", "2022-01-01"),
            range("2020-01-01", "2021-06-01"),
        ]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].start, date("2020-01-01"));
        assert_eq!(merged[0].end, date("2022-01-01"));
    }

    #[test]
    fn test_contained_range_does_not_shrink_end() {
        let merged = merge_ranges(&[
            range("2020-01-01", "2023-01-01"),
            range("2021-01-01", "2021-02-01"),
        ]);

        assert_eq!(merged, vec![range("2020-01-01", "2023-01-01").into()]);
    }

    #[test]
    fn test_touching_ranges_merge_but_next_day_does_not() {
        let touching = merge_ranges(&[
            range("2020-01-01", "2021-01-01"),
            range("2021-01-01", "2022-01-01"),
        ]);
        assert_eq!(touching.len(), 1);

        let next_day = merge_ranges(&[
            range("2020-01-01", "2021-01-01"),
            range("2021-01-02", "2022-01-01"),
        ]);
        assert_eq!(next_day.len(), 2);
        assert!(next_day[0].end < next_day[1].start);
    }
}
