//! # browsepilot runtime
//!
//! The orchestration loop: asks a [`Planner`](browsepilot_protocols::Planner)
//! for one tool call per turn, dispatches it through the
//! [`ToolRegistry`](browsepilot_core::ToolRegistry) and feeds the outcome back
//! as a tool turn until the planner declares completion, the session fails
//! unrecoverably or the turn ceiling is hit.

pub mod history;
pub mod orchestrator;
pub mod report;
pub mod scripted;

pub use history::ConversationHistory;
pub use orchestrator::{OrchestrationLoop, OrchestratorConfig, TaskRequest, DEFAULT_MAX_TURNS};
pub use report::{FailureReason, RunReport, RunStatus};
pub use scripted::ScriptedPlanner;
