//! HTTP behaviour of [HttpAskClient] against a mock `/ask` server.
//!
//! Run with: cargo test -p qabot-client --test ask

use mockito::Matcher;
use qabot_client::{AskClient, AskError, ClientConfig, HttpAskClient};
use qabot_core::AskRequest;
use serde_json::json;

fn client_for(server: &mockito::ServerGuard) -> HttpAskClient {
    HttpAskClient::new(ClientConfig::new(server.url())).expect("client builds")
}

#[tokio::test]
async fn posts_json_and_returns_answer_with_source() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/ask")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({ "user_input": "Hello" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"answer":"Hi there","source":"greeting.txt"}"#)
        .expect(1)
        .create_async()
        .await;

    let reply = client_for(&server)
        .ask(AskRequest::new("Hello"))
        .await
        .expect("ask succeeds");

    mock.assert_async().await;
    assert_eq!(reply.answer, "Hi there");
    assert_eq!(reply.source.as_deref(), Some("greeting.txt"));
}

#[tokio::test]
async fn answer_without_source() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/ask")
        .with_status(200)
        .with_body(r#"{"answer":"line1\nline2"}"#)
        .create_async()
        .await;

    let reply = client_for(&server).ask(AskRequest::new("q")).await.unwrap();
    assert_eq!(reply.answer, "line1\nline2");
    assert!(reply.source.is_none());
}

#[tokio::test]
async fn non_success_status_is_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/ask")
        .with_status(400)
        .with_body(r#"{"answer":"Error: No input received"}"#)
        .create_async()
        .await;

    let err = client_for(&server).ask(AskRequest::new("")).await.unwrap_err();
    match err {
        AskError::Status { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("No input received"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn html_body_is_decode_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/ask")
        .with_status(200)
        .with_body("<html>oops</html>")
        .create_async()
        .await;

    let err = client_for(&server).ask(AskRequest::new("q")).await.unwrap_err();
    assert!(matches!(err, AskError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn missing_answer_is_malformed_response() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/ask")
        .with_status(200)
        .with_body(r#"{"source":"a.pdf"}"#)
        .create_async()
        .await;

    let err = client_for(&server).ask(AskRequest::new("q")).await.unwrap_err();
    assert!(matches!(err, AskError::MalformedResponse(_)), "got {err:?}");
}

#[tokio::test]
async fn base_url_with_trailing_slash_still_hits_ask() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/ask")
        .with_status(200)
        .with_body(r#"{"answer":"ok"}"#)
        .create_async()
        .await;

    let client = HttpAskClient::new(ClientConfig::new(format!("{}/", server.url()))).unwrap();
    client.ask(AskRequest::new("q")).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    // Port 1 is reserved (tcpmux) and not listening on test machines.
    let client = HttpAskClient::new(ClientConfig::new("http://127.0.0.1:1")).unwrap();
    let err = client.ask(AskRequest::new("q")).await.unwrap_err();
    assert!(matches!(err, AskError::Transport(_)), "got {err:?}");
}
