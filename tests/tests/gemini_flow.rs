use application::remote_responder::{RemoteResponder, FALLBACK_PHRASES};
use application::responder::Responder;
use application::turn_controller::TurnController;
use infrastructure::config::{Config, Variant};
use infrastructure::gemini_client::GeminiClient;
use mockito::Matcher;

fn remote_config(base_url: &str, key: &str) -> Config {
    Config {
        gemini_api_key: key.to_string(),
        gemini_model: "gemini-test".to_string(),
        gemini_base_url: base_url.to_string(),
        variant: Variant::Remote,
        ..Config::default()
    }
}

#[tokio::test]
async fn gemini_reply_lands_in_the_store() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-test:generateContent")
        .match_header("x-goog-api-key", "k")
        .match_body(Matcher::Regex(r"user: hello\\nassistant:".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"Hi **there**"}]}}]}"#)
        .create_async()
        .await;

    let config = remote_config(&server.url(), "k");
    let controller = TurnController::new(Responder::from_config(&config));
    controller.submit("hello").await;

    let messages = controller.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2].text, "Hi **there**");
    mock.assert_async().await;
}

#[tokio::test]
async fn quota_error_falls_back() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", Matcher::Any)
        .with_status(429)
        .with_body(r#"{"error":{"status":"RESOURCE_EXHAUSTED"}}"#)
        .create_async()
        .await;

    let config = remote_config(&server.url(), "k");
    let controller = TurnController::new(RemoteResponder::new(GeminiClient::new(&config)));
    let outcome = controller.submit("hello").await;

    assert!(FALLBACK_PHRASES.contains(&outcome.reply().unwrap().text.as_str()));
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn unreachable_endpoint_falls_back() {
    // Nothing listens on port 9 on a test box.
    let config = remote_config("http://127.0.0.1:9", "k");
    let controller = TurnController::new(Responder::from_config(&config));
    let outcome = controller.submit("hello").await;

    assert!(FALLBACK_PHRASES.contains(&outcome.reply().unwrap().text.as_str()));
    assert_eq!(controller.len(), 3);
}
