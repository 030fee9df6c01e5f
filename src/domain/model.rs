use crate::utils::error::{FolioError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One period of engagement, inclusive on both ends. `end >= start` always
/// holds; the only way to build one is through [`DateRange::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(FolioError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

/// A disjoint interval produced by coalescing overlapping or touching
/// [`DateRange`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MergedInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl From<DateRange> for MergedInterval {
    fn from(range: DateRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// Total elapsed experience in whole calendar months.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Tenure {
    total_months: u32,
}

impl Tenure {
    pub fn from_months(total_months: u32) -> Self {
        Self { total_months }
    }

    pub fn total_months(&self) -> u32 {
        self.total_months
    }

    pub fn years(&self) -> u32 {
        self.total_months / 12
    }

    pub fn months(&self) -> u32 {
        self.total_months % 12
    }
}

// No singular forms: "1 years and 1 months" is the established wording.
impl fmt::Display for Tenure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} years and {} months", self.years(), self.months())
    }
}

/// One employment record of the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    pub from_date: NaiveDate,
    /// `None` means the engagement is ongoing.
    #[serde(default)]
    pub to_date: Option<NaiveDate>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Engagement {
    pub fn is_ongoing(&self) -> bool {
        self.to_date.is_none()
    }

    /// Resolves the engagement to a validated range, measuring ongoing
    /// engagements up to `as_of`.
    pub fn date_range(&self, as_of: NaiveDate) -> Result<DateRange> {
        DateRange::new(self.from_date, self.to_date.unwrap_or(as_of))
    }

    /// e.g. `Oct 2022 - Present`
    pub fn duration_label(&self) -> String {
        let to = match self.to_date {
            Some(date) => date.format("%b %Y").to_string(),
            None => "Present".to_string(),
        };
        format!("{} - {}", self.from_date.format("%b %Y"), to)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
}

impl NavItem {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
        }
    }
}

/// A labelled outbound link: social profiles, interest actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Self-assessed proficiency, 0-100.
    pub level: u8,
    #[serde(default)]
    pub years_of_experience: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub trending: bool,
    #[serde(default)]
    pub certification: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    /// Free-form, e.g. `2017 - 2020`
    #[serde(default)]
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub actions: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_range_rejects_end_before_start() {
        assert!(DateRange::new(date(2020, 1, 1), date(2020, 1, 1)).is_ok());
        assert!(matches!(
            DateRange::new(date(2021, 1, 1), date(2020, 12, 31)),
            Err(FolioError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_tenure_display_keeps_plural_wording() {
        assert_eq!(Tenure::from_months(0).to_string(), "0 years and 0 months");
        assert_eq!(Tenure::from_months(13).to_string(), "1 years and 1 months");
        assert_eq!(Tenure::from_months(25).to_string(), "2 years and 1 months");
    }

    #[test]
    fn test_ongoing_engagement_resolves_to_as_of() {
        let engagement = Engagement {
            role: "Senior Software Developer".to_string(),
            company: "Kruu Inc.".to_string(),
            location: "Chennai, India".to_string(),
            from_date: date(2022, 10, 1),
            to_date: None,
            achievements: vec![],
            tags: vec![],
        };

        let range = engagement.date_range(date(2025, 6, 1)).unwrap();
        assert_eq!(range.end(), date(2025, 6, 1));
        assert_eq!(engagement.duration_label(), "Oct 2022 - Present");

        assert!(engagement.date_range(date(2022, 9, 30)).is_err());
    }

    #[test]
    fn test_closed_engagement_label() {
        let engagement = Engagement {
            role: "Web Developer".to_string(),
            company: "SVS Infotech".to_string(),
            location: String::new(),
            from_date: date(2020, 9, 1),
            to_date: Some(date(2021, 10, 31)),
            achievements: vec![],
            tags: vec![],
        };

        assert!(!engagement.is_ongoing());
        assert_eq!(engagement.duration_label(), "Sep 2020 - Oct 2021");
    }
}
