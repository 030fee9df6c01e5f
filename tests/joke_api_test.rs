use folio::core::joke::JokeState;
use folio::domain::ports::JokeSource;
use folio::{FolioError, JokeApiClient, JokeWidget};
use httpmock::prelude::*;
use std::time::Duration;

fn client(server: &MockServer) -> JokeApiClient {
    JokeApiClient::new(server.url("/joke/Programming"), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_fetch_joke_success() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/joke/Programming");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "error": false,
                "category": "Programming",
                "type": "single",
                "joke": "A SQL query walks into a bar, walks up to two tables and asks, 'Can I join you?'",
                "id": 5,
                "safe": true,
                "lang": "en"
            }));
    });

    let joke = client(&server).fetch_joke().await.unwrap();

    mock.assert();
    assert!(joke.text.starts_with("A SQL query walks into a bar"));
}

#[tokio::test]
async fn test_api_error_flag_is_unavailable() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/joke/Programming");
        then.status(200).json_body(serde_json::json!({
            "error": true,
            "internalError": false,
            "code": 106,
            "message": "No matching joke found"
        }));
    });

    let err = client(&server).fetch_joke().await.unwrap_err();
    match err {
        FolioError::JokeUnavailable { reason } => assert_eq!(reason, "No matching joke found"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_is_unavailable() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/joke/Programming");
        then.status(500);
    });

    let err = client(&server).fetch_joke().await.unwrap_err();
    assert!(matches!(err, FolioError::JokeUnavailable { .. }));
}

#[tokio::test]
async fn test_widget_degrades_on_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/joke/Programming");
        then.status(200).body("not json");
    });

    let widget = JokeWidget::new(client(&server));
    assert_eq!(widget.refresh().await, JokeState::Failed);
}

#[tokio::test]
async fn test_widget_loads_joke() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/joke/Programming");
        then.status(200).json_body(serde_json::json!({
            "error": false,
            "joke": "Debugging: removing the needles from the haystack."
        }));
    });

    let widget = JokeWidget::new(client(&server));
    match widget.refresh().await {
        JokeState::Loaded(joke) => {
            assert_eq!(joke.text, "Debugging: removing the needles from the haystack.")
        }
        other => panic!("unexpected state: {:?}", other),
    }
}
