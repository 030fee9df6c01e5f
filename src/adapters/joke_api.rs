use crate::domain::model::Joke;
use crate::domain::ports::JokeSource;
use crate::utils::error::{FolioError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_JOKE_ENDPOINT: &str = "https://v2.jokeapi.dev/joke/Miscellaneous,Programming?blacklistFlags=racist,sexist,explicit&type=single";

/// Body returned by JokeAPI for `type=single` requests.
#[derive(Debug, Deserialize)]
struct JokeResponse {
    #[serde(default)]
    error: bool,
    joke: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct JokeApiClient {
    client: Client,
    endpoint: String,
}

impl JokeApiClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl JokeSource for JokeApiClient {
    async fn fetch_joke(&self) -> Result<Joke> {
        tracing::debug!("Making joke request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        tracing::debug!("Joke API response status: {}", response.status());
        if !response.status().is_success() {
            return Err(FolioError::JokeUnavailable {
                reason: format!("HTTP {}", response.status()),
            });
        }

        let body: JokeResponse = response.json().await?;
        if body.error {
            return Err(FolioError::JokeUnavailable {
                reason: body
                    .message
                    .unwrap_or_else(|| "API reported an error".to_string()),
            });
        }

        match body.joke {
            Some(text) if !text.trim().is_empty() => Ok(Joke { text }),
            _ => Err(FolioError::JokeUnavailable {
                reason: "response carried no joke".to_string(),
            }),
        }
    }
}
