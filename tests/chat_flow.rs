#![allow(clippy::unwrap_used)]
//! End-to-end chat turns against a mocked backend.

use mockito::Matcher;
use serde_json::json;
use yantra_cli::api::HttpChatClient;
use yantra_cli::session::{
    ChatController, FALLBACK_REPLY, Message, SEED_GREETING, Sender, TurnOutcome,
};

fn controller(server: &mockito::Server) -> ChatController<HttpChatClient> {
    ChatController::new(HttpChatClient::new(server.url()), "gemini-1.5-flash")
}

#[tokio::test]
async fn test_hello_round_trip() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat")
        .match_body(Matcher::Json(
            json!({"prompt": "Hello", "model": "gemini-1.5-flash"}),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "status": "success",
                "response": "Hello! How can I help you today?",
                "model": "gemini-1.5-flash"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut c = controller(&server);
    assert_eq!(c.state().messages, vec![Message::bot(SEED_GREETING)]);

    let outcome = c.submit("Hello").await;

    assert_eq!(outcome, Some(TurnOutcome::Replied));
    assert_eq!(
        c.state().messages,
        vec![
            Message::seed(),
            Message::user("Hello"),
            Message::bot("Hello! How can I help you today?"),
        ]
    );
    assert!(!c.state().is_busy);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_yields_fallback() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat")
        .with_status(200)
        .with_body(json!({"status": "error"}).to_string())
        .create_async()
        .await;

    let mut c = controller(&server);
    let outcome = c.submit("Hi").await;

    assert_eq!(outcome, Some(TurnOutcome::Failed));
    assert_eq!(c.state().messages.len(), 3);
    let last = c.state().messages.last().unwrap();
    assert_eq!(last.text, FALLBACK_REPLY);
    assert_eq!(last.sender, Sender::Bot);
}

#[tokio::test]
async fn test_unexpected_shapes_yield_fallback() {
    let bodies = [
        "not json at all",
        r#"{"response": "no status"}"#,
        r#"{"status": "success"}"#,
        r#"{"status": "SUCCESS", "response": "wrong case"}"#,
    ];

    for body in bodies {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat")
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let mut c = controller(&server);
        c.submit("Hi").await;

        assert_eq!(
            c.state().messages.last().unwrap().text,
            FALLBACK_REPLY,
            "body: {body}"
        );
    }
}

#[tokio::test]
async fn test_server_error_yields_fallback() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat")
        .with_status(500)
        .create_async()
        .await;

    let mut c = controller(&server);
    c.submit("Hi").await;

    assert_eq!(c.state().messages.last().unwrap().text, FALLBACK_REPLY);
}

#[tokio::test]
async fn test_model_switch_applies_to_next_send() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat")
        .match_body(Matcher::PartialJson(json!({"model": "gemini-pro"})))
        .with_status(200)
        .with_body(json!({"status": "success", "response": "pro reply"}).to_string())
        .create_async()
        .await;

    let mut c = controller(&server);
    c.select_model("gemini-pro");
    c.submit("Which model?").await;

    assert_eq!(c.state().messages.last().unwrap().text, "pro reply");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_archive_and_reopen_across_turns() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat")
        .with_status(200)
        .with_body(json!({"status": "success", "response": "noted"}).to_string())
        .expect(2)
        .create_async()
        .await;

    let mut c = controller(&server);
    c.submit("Remember the number 42").await;
    let first = c.state().messages.clone();
    c.archive_and_clear();

    c.submit("Something else").await;
    c.archive_and_clear();

    assert_eq!(c.state().conversations.len(), 2);
    c.open_conversation(0).unwrap();
    assert_eq!(c.state().messages, first);
}
