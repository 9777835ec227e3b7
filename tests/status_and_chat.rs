//! Contract tests for the health and AI endpoints.
//!
//! Health and AI status report through their payload rather than their HTTP
//! status, so both must survive any status code, and both must turn a
//! non-JSON body into an error instead of a panic.

use mockito::Matcher;
use protocol_builder_client::{ApiClientBuilder, ChatTurn, Error};
use serde_json::json;

fn client_for(server: &mockito::ServerGuard) -> protocol_builder_client::ApiClient {
    ApiClientBuilder::new()
        .base_url(server.url())
        .build()
        .expect("mock server URL must be valid")
}

#[tokio::test]
async fn health_parses_the_status_field() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/health")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": "healthy"}"#)
        .create_async()
        .await;

    let health = client_for(&server).health().await.unwrap();
    assert!(health.is_healthy());
}

#[tokio::test]
async fn health_still_parses_a_degraded_payload_on_503() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/health")
        .with_status(503)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": "degraded"}"#)
        .create_async()
        .await;

    let health = client_for(&server).health().await.unwrap();
    assert!(!health.is_healthy());
    assert_eq!(health.status, "degraded");
}

#[tokio::test]
async fn health_turns_an_html_error_page_into_unexpected_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/health")
        .with_status(500)
        .with_header("content-type", "text/html")
        .with_body("<html><body>Internal Server Error</body></html>")
        .create_async()
        .await;

    let err = client_for(&server).health().await.unwrap_err();
    assert!(matches!(err, Error::UnexpectedBody { status: 500, .. }));
}

#[tokio::test]
async fn ai_status_parses_the_configured_flag() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/ai/status")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"configured": false}"#)
        .create_async()
        .await;

    let status = client_for(&server).ai_status().await.unwrap();
    assert!(!status.configured);
}

#[tokio::test]
async fn ai_status_turns_a_non_json_body_into_unexpected_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/ai/status")
        .with_status(502)
        .with_header("content-type", "text/html")
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let err = client_for(&server).ai_status().await.unwrap_err();
    assert!(matches!(err, Error::UnexpectedBody { status: 502, .. }));
}

#[tokio::test]
async fn chat_sends_workspace_message_and_ordered_history() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/ai/chat")
        .match_body(Matcher::Json(json!({
            "workspace": "protocols",
            "message": "and after that?",
            "history": [
                {"role": "user", "content": "what blocks exist?"},
                {"role": "assistant", "content": "Action and Decision blocks."},
            ],
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"response": "Then the flow ends."}"#)
        .create_async()
        .await;

    let reply = client_for(&server)
        .chat("protocols", "and after that?")
        .turn(ChatTurn::user("what blocks exist?"))
        .turn(ChatTurn::assistant("Action and Decision blocks."))
        .send()
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reply["response"], "Then the flow ends.");
    mock.assert_async().await;
}

#[tokio::test]
async fn chat_includes_current_flow_yaml_only_when_set() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/ai/chat")
        .match_body(Matcher::Json(json!({
            "workspace": "protocols",
            "message": "improve this",
            "history": [],
            "currentFlowYaml": "diagram: {}",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"response": "Looks minimal."}"#)
        .create_async()
        .await;

    client_for(&server)
        .chat("protocols", "improve this")
        .current_flow_yaml("diagram: {}")
        .send()
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn chat_returns_none_when_the_assistant_rejects() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/ai/chat")
        .with_status(503)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "assistant not configured"}"#)
        .create_async()
        .await;

    let reply = client_for(&server)
        .chat("protocols", "hello")
        .send()
        .await
        .unwrap();
    assert!(reply.is_none());
}
