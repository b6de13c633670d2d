//! Outcome of an orchestration run.

use serde::{Deserialize, Serialize};

use browsepilot_protocols::types::{ConversationTurn, ToolInvocation};

/// Terminal state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Completed,
    Failed,
}

/// Why a run ended in [`RunStatus::Failed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum FailureReason {
    /// The turn ceiling was reached before the planner signalled completion.
    MaxTurnsExceeded { max_turns: u32 },
    /// The browser session died mid-run.
    Unrecoverable { tool: String, message: String },
    /// The planner could not produce a decision.
    PlannerFailure { message: String },
}

impl FailureReason {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            FailureReason::MaxTurnsExceeded { .. } => "max_turns_exceeded",
            FailureReason::Unrecoverable { .. } => "unrecoverable",
            FailureReason::PlannerFailure { .. } => "planner_failure",
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::MaxTurnsExceeded { max_turns } => {
                write!(f, "turn ceiling of {} reached", max_turns)
            }
            FailureReason::Unrecoverable { tool, message } => {
                write!(f, "unrecoverable failure in {}: {}", tool, message)
            }
            FailureReason::PlannerFailure { message } => write!(f, "planner failed: {}", message),
        }
    }
}

/// Full record of one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: String,
    pub status: RunStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<FailureReason>,
    /// Planner decisions consumed.
    pub turns: u32,
    pub history: Vec<ConversationTurn>,
    pub invocations: Vec<ToolInvocation>,
    /// Completion text from the planner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl RunReport {
    pub fn is_completed(&self) -> bool {
        self.status == RunStatus::Completed
    }

    /// Names of the tools invoked, in order.
    pub fn tool_sequence(&self) -> Vec<&str> {
        self.invocations.iter().map(|i| i.tool_name.as_str()).collect()
    }
}
