//! Records of executed tool calls.

use serde::{Deserialize, Serialize};

use super::{ConversationTurn, ImageAttachment, Metadata, ToolCall};
use crate::error::{FailureKind, ToolError};
use crate::tool::ToolResult;

/// Outcome of a tool invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InvocationOutcome {
    Success {
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        structured_output: Option<serde_json::Value>,
        #[serde(default, skip_serializing_if = "Metadata::is_empty")]
        metadata: Metadata,
        /// Handed to the tool turn; reports keep only the metadata.
        #[serde(skip)]
        image: Option<ImageAttachment>,
    },
    Failure {
        kind: FailureKind,
        message: String,
    },
}

/// A single tool call together with its outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocation {
    pub call_id: String,
    pub tool_name: String,
    pub arguments: serde_json::Value,
    pub outcome: InvocationOutcome,
}

impl ToolInvocation {
    /// Build a record from a call and the registry's answer.
    pub fn from_result(call: &ToolCall, result: &Result<ToolResult, ToolError>) -> Self {
        let outcome = match result {
            Ok(r) => InvocationOutcome::Success {
                content: r.content.clone(),
                structured_output: r.structured_output.clone(),
                metadata: r.metadata.clone(),
                image: r.image.clone(),
            },
            Err(e) => InvocationOutcome::Failure {
                kind: e.kind(),
                message: e.to_string(),
            },
        };
        Self {
            call_id: call.id.clone(),
            tool_name: call.name.clone(),
            arguments: call.arguments.clone(),
            outcome,
        }
    }

    /// Whether the invocation succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, InvocationOutcome::Success { .. })
    }

    /// Failure kind, if the invocation failed.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match &self.outcome {
            InvocationOutcome::Failure { kind, .. } => Some(*kind),
            InvocationOutcome::Success { .. } => None,
        }
    }

    /// Metadata attached by a successful tool.
    pub fn metadata(&self) -> Option<&Metadata> {
        match &self.outcome {
            InvocationOutcome::Success { metadata, .. } => Some(metadata),
            InvocationOutcome::Failure { .. } => None,
        }
    }

    /// Convert into the tool turn appended to the history.
    ///
    /// Structured output is rendered after the text so the planner sees it;
    /// a saved file path is appended the same way. Images ride on the turn
    /// rather than in its text.
    pub fn to_turn(&self) -> ConversationTurn {
        match &self.outcome {
            InvocationOutcome::Success {
                content,
                structured_output,
                metadata,
                image,
            } => {
                let mut text = content.clone();
                if let Some(output) = structured_output {
                    text = format!("{}\n{}", text, output);
                }
                if let Some(path) = metadata.get("path").and_then(|p| p.as_str()) {
                    text = format!("{}\nSaved to {}", text, path);
                }
                let turn = ConversationTurn::tool_success(&self.call_id, text);
                match image {
                    Some(image) => turn.with_image(image.clone()),
                    None => turn,
                }
            }
            InvocationOutcome::Failure { kind, message } => {
                ConversationTurn::tool_failure(&self.call_id, *kind, format!("Error: {}", message))
            }
        }
    }
}
