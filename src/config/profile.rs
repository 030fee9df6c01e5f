use crate::adapters::DEFAULT_JOKE_ENDPOINT;
use crate::core::navigation::{default_nav_items, DEFAULT_HEADER_OFFSET};
use crate::domain::model::{EducationEntry, Engagement, Interest, Link, NavItem, SkillCategory};
use crate::domain::ports::ProfileProvider;
use crate::utils::error::{FolioError, Result};
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

const EMBEDDED_PROFILE: &str = include_str!("default_profile.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub profile: ProfileSection,
    #[serde(default)]
    pub engagements: Vec<Engagement>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub interests: Vec<Interest>,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub joke: JokeConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSection {
    pub name: String,
    #[serde(default)]
    pub headline: String,
    /// Ongoing engagements are measured up to this date; today when unset.
    pub as_of: Option<NaiveDate>,
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Defaults to `Designed & Built by <name>`.
    pub footer: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    #[serde(default = "default_header_offset")]
    pub header_offset: f64,
    #[serde(default = "default_nav_items")]
    pub items: Vec<NavItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JokeConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_joke_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

fn default_header_offset() -> f64 {
    DEFAULT_HEADER_OFFSET
}

fn default_true() -> bool {
    true
}

fn default_joke_endpoint() -> String {
    DEFAULT_JOKE_ENDPOINT.to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_simulated_delay_ms() -> u64 {
    1000
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            header_offset: default_header_offset(),
            items: default_nav_items(),
        }
    }
}

impl Default for JokeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_joke_endpoint(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_simulated_delay_ms(),
            links: Vec::new(),
        }
    }
}

impl ProfileConfig {
    /// Load a profile from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a profile from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FolioError::ConfigParseError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })
    }

    /// The profile bundled into the binary
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_PROFILE)
    }

    /// Replace `${VAR}` with the environment variable's value. Unset
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("profile.name", &self.profile.name)?;

        for (index, engagement) in self.engagements.iter().enumerate() {
            validation::validate_non_empty_string(
                &format!("engagements[{}].role", index),
                &engagement.role,
            )?;
            validation::validate_non_empty_string(
                &format!("engagements[{}].company", index),
                &engagement.company,
            )?;
            engagement.date_range(self.as_of())?;
        }

        for (index, category) in self.skills.iter().enumerate() {
            validation::validate_non_empty_string(
                &format!("skills[{}].title", index),
                &category.title,
            )?;
            for (skill_index, skill) in category.skills.iter().enumerate() {
                let field = format!("skills[{}].skills[{}]", index, skill_index);
                validation::validate_non_empty_string(&format!("{}.name", field), &skill.name)?;
                validation::validate_range(&format!("{}.level", field), skill.level, 0, 100)?;
            }
        }

        for (index, entry) in self.education.iter().enumerate() {
            validation::validate_non_empty_string(
                &format!("education[{}].degree", index),
                &entry.degree,
            )?;
        }

        for (index, interest) in self.interests.iter().enumerate() {
            validation::validate_non_empty_string(
                &format!("interests[{}].title", index),
                &interest.title,
            )?;
            for (action_index, action) in interest.actions.iter().enumerate() {
                validation::validate_link(
                    &format!("interests[{}].actions[{}].href", index, action_index),
                    &action.href,
                )?;
            }
        }

        for (index, link) in self.contact.links.iter().enumerate() {
            validation::validate_non_empty_string(
                &format!("contact.links[{}].label", index),
                &link.label,
            )?;
            validation::validate_link(&format!("contact.links[{}].href", index), &link.href)?;
        }

        validation::validate_unique(
            "navigation.items",
            self.navigation.items.iter().map(|item| item.id.as_str()),
        )?;
        if !self.navigation.header_offset.is_finite() || self.navigation.header_offset < 0.0 {
            return Err(FolioError::InvalidConfigValueError {
                field: "navigation.header_offset".to_string(),
                value: self.navigation.header_offset.to_string(),
                reason: "Offset must be a non-negative number".to_string(),
            });
        }

        if self.joke.enabled {
            validation::validate_url("joke.endpoint", &self.joke.endpoint)?;
            validation::validate_positive_number(
                "joke.timeout_seconds",
                self.joke.timeout_seconds,
                1,
            )?;
        }

        Ok(())
    }

    pub fn joke_timeout(&self) -> Duration {
        Duration::from_secs(self.joke.timeout_seconds)
    }

    pub fn contact_delay(&self) -> Duration {
        Duration::from_millis(self.contact.simulated_delay_ms)
    }

    pub fn footer(&self) -> String {
        match &self.profile.footer {
            Some(footer) => footer.clone(),
            None => format!("Designed & Built by {}", self.profile.name),
        }
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl ProfileProvider for ProfileConfig {
    fn engagements(&self) -> &[Engagement] {
        &self.engagements
    }

    fn as_of(&self) -> NaiveDate {
        self.profile
            .as_of
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

impl Validate for ProfileConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
