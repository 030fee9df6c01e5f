use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error in `{field}`: {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Invalid value `{value}` for `{field}`: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Date range ends ({end}) before it starts ({start})")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Unknown section `{id}`")]
    UnknownSection { id: String },

    #[error("Joke unavailable: {reason}")]
    JokeUnavailable { reason: String },

    #[error("Contact form field `{field}` is invalid: {reason}")]
    ContactValidationError { field: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Data,
    Network,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FolioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FolioError::ConfigParseError { .. } | FolioError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            FolioError::InvalidDateRange { .. } | FolioError::SerializationError(_) => {
                ErrorCategory::Data
            }
            FolioError::HttpError(_) | FolioError::JokeUnavailable { .. } => {
                ErrorCategory::Network
            }
            FolioError::UnknownSection { .. } | FolioError::ContactValidationError { .. } => {
                ErrorCategory::Input
            }
            FolioError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // The joke widget is best-effort; nothing depends on it.
            FolioError::JokeUnavailable { .. } => ErrorSeverity::Low,
            FolioError::HttpError(_) => ErrorSeverity::Medium,
            FolioError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// Process exit status for the binary. Every error exits non-zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the profile TOML against the bundled default profile"
            }
            ErrorCategory::Data => "Make sure every engagement's to_date is on or after its from_date",
            ErrorCategory::Network => "Check your network connection or try again later",
            ErrorCategory::Input => "Check the command line arguments and try again",
            ErrorCategory::System => "Check that the file exists and is readable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FolioError::InvalidDateRange { start, end } => format!(
                "An engagement ends on {} but starts on {}",
                end.format("%Y-%m-%d"),
                start.format("%Y-%m-%d")
            ),
            FolioError::JokeUnavailable { .. } | FolioError::HttpError(_) => {
                "Oops! Couldn't fetch a joke right now.".to_string()
            }
            FolioError::ContactValidationError { field, reason } => {
                format!("Please check the {} field: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
