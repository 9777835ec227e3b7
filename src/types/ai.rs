//! AI assistant wire types: status and chat.

use serde::{Deserialize, Serialize};

/// Payload of `GET /api/ai/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct AiStatus {
    pub configured: bool,
}

/// Speaker of one chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One prior exchange in the conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Body for `POST /api/ai/chat`.
///
/// `history` is always present on the wire (empty when there were no prior
/// turns); `currentFlowYaml` is omitted when absent. The camelCase name is the
/// server's, not ours.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub workspace: String,
    pub message: String,
    pub history: Vec<ChatTurn>,
    #[serde(rename = "currentFlowYaml", skip_serializing_if = "Option::is_none")]
    pub current_flow_yaml: Option<String>,
}

impl ChatRequest {
    pub fn new(workspace: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            workspace: workspace.into(),
            message: message.into(),
            history: Vec::new(),
            current_flow_yaml: None,
        }
    }
}
