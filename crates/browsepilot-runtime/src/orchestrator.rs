//! Turn-bounded orchestration loop.

use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};

use browsepilot_core::ToolRegistry;
use browsepilot_protocols::planner::{Planner, PlannerDecision};
use browsepilot_protocols::tool::ToolContext;
use browsepilot_protocols::types::{ConversationTurn, ToolCall, ToolInvocation};

use crate::history::ConversationHistory;
use crate::report::{FailureReason, RunReport, RunStatus};

/// Turn ceiling used when neither config nor request sets one.
pub const DEFAULT_MAX_TURNS: u32 = 20;

/// Configuration for the orchestration loop.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Maximum planner decisions per run.
    pub max_turns: u32,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

/// Input to a single run.
#[derive(Debug, Clone)]
pub struct TaskRequest {
    pub task: String,
    /// Turns recorded before this run; the task turn is appended after them.
    pub history: Vec<ConversationTurn>,
    /// Overrides [`OrchestratorConfig::max_turns`].
    pub max_turns: Option<u32>,
}

impl TaskRequest {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            history: Vec::new(),
            max_turns: None,
        }
    }

    pub fn with_history(mut self, history: Vec<ConversationTurn>) -> Self {
        self.history = history;
        self
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = Some(max_turns);
        self
    }
}

/// What a single turn produced.
enum Step {
    Continue,
    Done(RunStatus, Option<FailureReason>),
}

/// The orchestration loop executor.
///
/// One planner decision per turn, at most one tool in flight. Tool failures
/// become tool turns; only completion, an unrecoverable session failure, a
/// planner failure or the turn ceiling end the run.
pub struct OrchestrationLoop {
    registry: Arc<ToolRegistry>,
    planner: Arc<dyn Planner>,
    config: OrchestratorConfig,
}

impl OrchestrationLoop {
    pub fn new(
        registry: Arc<ToolRegistry>,
        planner: Arc<dyn Planner>,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            registry,
            planner,
            config,
        }
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Run a task to completion or failure.
    pub async fn run(&self, request: TaskRequest) -> RunReport {
        let run_id = uuid::Uuid::new_v4().to_string();
        let span = info_span!("run", run_id = %run_id, planner = self.planner.id());
        self.run_inner(run_id, request).instrument(span).await
    }

    async fn run_inner(&self, run_id: String, request: TaskRequest) -> RunReport {
        let max_turns = request.max_turns.unwrap_or(self.config.max_turns);
        let catalog = self.registry.list();

        let mut history = ConversationHistory::seeded(request.history);
        history.push(ConversationTurn::user(&request.task));

        let mut invocations = Vec::new();
        let mut summary = None;
        let mut turns: u32 = 0;

        info!(max_turns, tools = catalog.len(), "Starting run");

        let (status, reason) = loop {
            if turns >= max_turns {
                warn!(turns, "Turn ceiling reached");
                break (
                    RunStatus::Failed,
                    Some(FailureReason::MaxTurnsExceeded { max_turns }),
                );
            }

            turns += 1;
            debug!("Orchestration turn {}", turns);

            let decision = match self
                .planner
                .decide(&request.task, history.turns(), &catalog)
                .await
            {
                Ok(decision) => decision,
                Err(e) => {
                    warn!(error = %e, "Planner failed");
                    break (
                        RunStatus::Failed,
                        Some(FailureReason::PlannerFailure {
                            message: e.to_string(),
                        }),
                    );
                }
            };

            let step = match decision {
                PlannerDecision::Complete { summary: text } => {
                    history.push(ConversationTurn::assistant(&text));
                    summary = Some(text);
                    Step::Done(RunStatus::Completed, None)
                }
                PlannerDecision::ToolCall { call, message } => {
                    history.push(ConversationTurn::assistant_call(
                        message.unwrap_or_default(),
                        call.clone(),
                    ));
                    let invocation = self.dispatch(&run_id, turns, &call).await;
                    history.push(invocation.to_turn());
                    let step = match invocation.failure_kind() {
                        Some(kind) if kind.is_fatal() => Step::Done(
                            RunStatus::Failed,
                            Some(FailureReason::Unrecoverable {
                                tool: call.name.clone(),
                                message: history
                                    .last()
                                    .map(|t| t.content.clone())
                                    .unwrap_or_default(),
                            }),
                        ),
                        _ => Step::Continue,
                    };
                    invocations.push(invocation);
                    step
                }
            };

            if let Step::Done(status, reason) = step {
                break (status, reason);
            }
        };

        match &reason {
            None => info!(turns, "Run completed"),
            Some(r) => info!(turns, reason = r.code(), "Run failed: {}", r),
        }

        RunReport {
            run_id,
            status,
            reason,
            turns,
            history: history.into_turns(),
            invocations,
            summary,
        }
    }

    async fn dispatch(&self, run_id: &str, turn: u32, call: &ToolCall) -> ToolInvocation {
        let ctx = ToolContext::new(run_id, turn);
        let result = self.registry.invoke(call, ctx).await;
        match &result {
            Ok(_) => debug!(tool = %call.name, "Tool succeeded"),
            Err(e) => warn!(tool = %call.name, kind = %e.kind(), "Tool failed: {}", e),
        }
        ToolInvocation::from_result(call, &result)
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
