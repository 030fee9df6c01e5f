// Adapters layer: concrete implementations of domain ports for external systems.

pub mod joke_api;

pub use joke_api::{JokeApiClient, DEFAULT_JOKE_ENDPOINT};
