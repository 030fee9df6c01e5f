use crate::domain::model::Joke;
use crate::domain::ports::JokeSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JokeState {
    Disabled,
    Loaded(Joke),
    Failed,
}

/// The About section's joke card. Fetching is best-effort: any failure ends
/// up as [`JokeState::Failed`] and is only logged.
pub struct JokeWidget<S: JokeSource> {
    source: Option<S>,
}

impl<S: JokeSource> JokeWidget<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Some(source),
        }
    }

    pub fn disabled() -> Self {
        Self { source: None }
    }

    pub async fn refresh(&self) -> JokeState {
        let Some(source) = &self.source else {
            return JokeState::Disabled;
        };

        match source.fetch_joke().await {
            Ok(joke) => {
                tracing::debug!("Fetched joke ({} chars)", joke.text.len());
                JokeState::Loaded(joke)
            }
            Err(e) => {
                tracing::warn!("Error fetching joke: {}", e);
                JokeState::Failed
            }
        }
    }
}
