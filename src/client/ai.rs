//! AI assistant endpoints: configuration status and non-streaming chat.
//!
//! The service also exposes `POST /api/ai/chat/stream` (SSE); this client
//! deliberately leaves it unwrapped.

use crate::client::core::{decode_any_status, decode_if_status, ApiClient};
use crate::render;
use crate::types::ai::{AiStatus, ChatRequest, ChatTurn};
use crate::Result;
use reqwest::Method;

impl ApiClient {
    /// `GET /api/ai/status`. Returns the payload whatever the HTTP status is.
    pub async fn ai_status(&self) -> Result<AiStatus> {
        let response = self.transport.get("/api/ai/status").await?;
        render::print_response("AI Status", &response);
        decode_any_status(&response)
    }

    /// Start a `POST /api/ai/chat` request.
    pub fn chat(
        &self,
        workspace: impl Into<String>,
        message: impl Into<String>,
    ) -> ChatRequestBuilder<'_> {
        ChatRequestBuilder {
            client: self,
            request: ChatRequest::new(workspace, message),
        }
    }
}

/// Builder for chat requests.
pub struct ChatRequestBuilder<'a> {
    client: &'a ApiClient,
    request: ChatRequest,
}

impl<'a> ChatRequestBuilder<'a> {
    /// Replace the conversation history.
    pub fn history(mut self, history: Vec<ChatTurn>) -> Self {
        self.request.history = history;
        self
    }

    /// Append one prior turn.
    pub fn turn(mut self, turn: ChatTurn) -> Self {
        self.request.history.push(turn);
        self
    }

    /// Attach the flow YAML the user is currently editing.
    pub fn current_flow_yaml(mut self, yaml: impl Into<String>) -> Self {
        self.request.current_flow_yaml = Some(yaml.into());
        self
    }

    /// Execute the request. `None` unless the server answers 200. The reply
    /// schema belongs to the server, so the body stays loose JSON.
    pub async fn send(self) -> Result<Option<serde_json::Value>> {
        let body = serde_json::to_value(&self.request)?;
        let response = self
            .client
            .transport
            .request(Method::POST, "/api/ai/chat", Some(&body))
            .await?;
        render::print_response(&format!("AI Chat ({})", self.request.workspace), &response);
        decode_if_status(&response, 200)
    }
}
