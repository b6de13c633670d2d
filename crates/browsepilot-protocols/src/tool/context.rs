//! Tool execution context.

/// Context for a single tool execution.
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// Identifier of the orchestration run issuing the call.
    pub run_id: String,

    /// 1-based turn index within the run.
    pub turn: u32,
}

impl ToolContext {
    /// Create a new tool context.
    pub fn new(run_id: impl Into<String>, turn: u32) -> Self {
        Self {
            run_id: run_id.into(),
            turn,
        }
    }
}
