pub mod contact;
pub mod joke;
pub mod merge;
pub mod navigation;
pub mod page;
pub mod tenure;

pub use crate::domain::model::{DateRange, Engagement, MergedInterval, Tenure};
pub use crate::domain::ports::{JokeSource, ProfileProvider};
pub use crate::utils::error::Result;
