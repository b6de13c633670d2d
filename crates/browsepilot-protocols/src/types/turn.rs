//! Conversation turn types.

use serde::{Deserialize, Serialize};

use super::ImageAttachment;
use crate::error::FailureKind;

/// Role of a conversation turn author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
    Tool,
}

/// A tool call requested by the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Unique call ID, echoed back in the matching tool turn.
    #[serde(default = "generate_call_id")]
    pub id: String,

    /// Tool name.
    pub name: String,

    /// Arguments (JSON object).
    pub arguments: serde_json::Value,
}

impl ToolCall {
    /// Create a tool call with a freshly generated ID.
    pub fn new(name: impl Into<String>, arguments: serde_json::Value) -> Self {
        Self {
            id: generate_call_id(),
            name: name.into(),
            arguments,
        }
    }

    /// Replace the generated ID.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

fn generate_call_id() -> String {
    format!("call_{}", uuid::Uuid::new_v4().simple())
}

/// One entry in the orchestration history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: TurnRole,

    /// Text content of the turn.
    pub content: String,

    /// Tool call carried by an assistant turn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call: Option<ToolCall>,

    /// Call this tool turn answers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,

    /// Failure kind for a failed tool turn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureKind>,

    /// Image produced by the tool. Not serialized; saved screenshots are
    /// referenced by path instead.
    #[serde(skip)]
    pub image: Option<ImageAttachment>,
}

impl ConversationTurn {
    fn new(role: TurnRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            tool_call: None,
            tool_call_id: None,
            failure: None,
            image: None,
        }
    }

    /// Create a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(TurnRole::User, content)
    }

    /// Create a plain assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(TurnRole::Assistant, content)
    }

    /// Create an assistant turn that requests a tool call.
    pub fn assistant_call(content: impl Into<String>, call: ToolCall) -> Self {
        let mut turn = Self::new(TurnRole::Assistant, content);
        turn.tool_call = Some(call);
        turn
    }

    /// Create a tool turn for a successful call.
    pub fn tool_success(call_id: impl Into<String>, content: impl Into<String>) -> Self {
        let mut turn = Self::new(TurnRole::Tool, content);
        turn.tool_call_id = Some(call_id.into());
        turn
    }

    /// Attach a tool-produced image.
    pub fn with_image(mut self, image: ImageAttachment) -> Self {
        self.image = Some(image);
        self
    }

    /// Create a tool turn for a failed call.
    pub fn tool_failure(
        call_id: impl Into<String>,
        kind: FailureKind,
        message: impl Into<String>,
    ) -> Self {
        let mut turn = Self::new(TurnRole::Tool, message);
        turn.tool_call_id = Some(call_id.into());
        turn.failure = Some(kind);
        turn
    }

    /// Whether this turn records a failed tool call.
    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }
}

#[cfg(test)]
#[path = "turn_tests.rs"]
mod tests;
