//! Planner protocol definitions.
//!
//! A planner picks the next tool call given the task, the history so far and
//! the tool catalog. It never touches the browser itself.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::tool::ToolDefinition;
use crate::types::{ConversationTurn, ToolCall};

/// What the planner wants to do next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PlannerDecision {
    /// Invoke exactly one tool.
    ToolCall {
        call: ToolCall,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// The task is done.
    Complete { summary: String },
}

impl PlannerDecision {
    /// Shorthand for a tool call decision without accompanying text.
    pub fn call(name: impl Into<String>, arguments: serde_json::Value) -> Self {
        Self::ToolCall {
            call: ToolCall::new(name, arguments),
            message: None,
        }
    }

    /// Shorthand for a completion decision.
    pub fn complete(summary: impl Into<String>) -> Self {
        Self::Complete {
            summary: summary.into(),
        }
    }
}

/// Core trait for planners.
#[async_trait]
pub trait Planner: Send + Sync {
    /// Returns the planner ID.
    fn id(&self) -> &str;

    /// Decide the next step.
    async fn decide(
        &self,
        task: &str,
        history: &[ConversationTurn],
        catalog: &[ToolDefinition],
    ) -> Result<PlannerDecision, PlannerError>;
}
