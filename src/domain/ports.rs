use crate::domain::model::{Engagement, Joke};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Read access to the static profile the calculator runs over.
pub trait ProfileProvider: Send + Sync {
    fn engagements(&self) -> &[Engagement];

    /// Date that ongoing engagements are measured to.
    fn as_of(&self) -> NaiveDate;
}

#[async_trait]
pub trait JokeSource: Send + Sync {
    async fn fetch_joke(&self) -> Result<Joke>;
}
