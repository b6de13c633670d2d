//! Tool execution errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Parameter validation failed: {0}")]
    ValidationFailed(String),

    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("Browser driver error: {0}")]
    Driver(String),

    #[error("{operation} timed out after {millis} ms")]
    Timeout { operation: String, millis: u64 },

    #[error("Unrecoverable session failure: {0}")]
    Unrecoverable(String),

    #[error("Tool execution failed: {0}")]
    ExecutionFailed(String),
}

impl ToolError {
    /// Classify the error into the failure taxonomy reported to the planner.
    pub fn kind(&self) -> FailureKind {
        match self {
            ToolError::NotFound(_) => FailureKind::UnknownTool,
            ToolError::InvalidParameters(_) | ToolError::ValidationFailed(_) => {
                FailureKind::Validation
            }
            ToolError::Precondition(_) => FailureKind::Precondition,
            ToolError::Unrecoverable(_) => FailureKind::Unrecoverable,
            ToolError::Driver(_)
            | ToolError::Timeout { .. }
            | ToolError::ExecutionFailed(_) => FailureKind::Driver,
        }
    }
}

/// Failure taxonomy for a tool invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// A page-dependent tool ran with no open session.
    Precondition,
    /// Arguments did not match the tool's parameter schema.
    Validation,
    /// Navigation, timeout or element lookup failed in the browser.
    Driver,
    /// The planner named a tool that is not registered.
    UnknownTool,
    /// The browser process or its connection is gone.
    Unrecoverable,
}

impl FailureKind {
    /// Whether this failure ends the run instead of becoming a tool turn.
    pub fn is_fatal(&self) -> bool {
        matches!(self, FailureKind::Unrecoverable)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Precondition => "precondition",
            FailureKind::Validation => "validation",
            FailureKind::Driver => "driver",
            FailureKind::UnknownTool => "unknown_tool",
            FailureKind::Unrecoverable => "unrecoverable",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
