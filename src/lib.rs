pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::JokeApiClient;
pub use crate::config::ProfileConfig;
pub use crate::core::{
    contact::ContactDesk, joke::JokeWidget, merge::merge_ranges, navigation::ScrollSpy,
    page::PortfolioPage, tenure::calculate_overall_experience,
};
pub use crate::domain::model::{ContactForm, DateRange, Engagement, MergedInterval, Tenure};
pub use crate::utils::error::{FolioError, Result};
