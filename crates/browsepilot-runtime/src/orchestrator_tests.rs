use super::*;
use crate::scripted::ScriptedPlanner;
use async_trait::async_trait;
use browsepilot_protocols::error::{FailureKind, ToolError};
use browsepilot_protocols::tool::{Tool, ToolDefinition, ToolResult};
use browsepilot_protocols::types::TurnRole;

/// Echoes its `text` argument.
struct EchoTool {
    definition: ToolDefinition,
}

impl EchoTool {
    fn new() -> Self {
        Self {
            definition: ToolDefinition::new("echo", "Echo", "Echo the text back")
                .with_parameters_schema(serde_json::json!({
                    "type": "object",
                    "properties": {"text": {"type": "string"}},
                    "required": ["text"]
                })),
        }
    }
}

#[async_trait]
impl Tool for EchoTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let text = params["text"].as_str().unwrap_or_default();
        Ok(ToolResult::success(format!("echo: {}", text)))
    }
}

/// Always fails with the configured error kind.
struct FailingTool {
    definition: ToolDefinition,
    fatal: bool,
}

impl FailingTool {
    fn new(name: &str, fatal: bool) -> Self {
        Self {
            definition: ToolDefinition::new(name, "Failing", "Always fails"),
            fatal,
        }
    }
}

#[async_trait]
impl Tool for FailingTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        _params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        if self.fatal {
            Err(ToolError::Unrecoverable("browser connection closed".to_string()))
        } else {
            Err(ToolError::Precondition("open a browser session first".to_string()))
        }
    }
}

fn registry() -> Arc<ToolRegistry> {
    let registry = ToolRegistry::new();
    registry.register(Arc::new(EchoTool::new())).unwrap();
    registry.register(Arc::new(FailingTool::new("needs_page", false))).unwrap();
    registry.register(Arc::new(FailingTool::new("crash", true))).unwrap();
    Arc::new(registry)
}

fn orchestrator(planner: Arc<ScriptedPlanner>, max_turns: u32) -> OrchestrationLoop {
    OrchestrationLoop::new(registry(), planner, OrchestratorConfig { max_turns })
}

#[test]
fn test_config_default() {
    assert_eq!(OrchestratorConfig::default().max_turns, DEFAULT_MAX_TURNS);
}

#[tokio::test]
async fn test_completes_immediately() {
    let planner = Arc::new(ScriptedPlanner::new(vec![PlannerDecision::complete("nothing to do")]));
    let report = orchestrator(planner, 5).run(TaskRequest::new("idle")).await;

    assert_eq!(report.status, RunStatus::Completed);
    assert_eq!(report.turns, 1);
    assert_eq!(report.summary.as_deref(), Some("nothing to do"));
    assert!(report.invocations.is_empty());
    assert_eq!(report.history.len(), 2);
    assert_eq!(report.history[0].role, TurnRole::User);
    assert_eq!(report.history[0].content, "idle");
}

#[tokio::test]
async fn test_tool_result_fed_back_as_tool_turn() {
    let planner = Arc::new(ScriptedPlanner::new(vec![
        PlannerDecision::call("echo", serde_json::json!({"text": "hi"})),
        PlannerDecision::complete("done"),
    ]));
    let report = orchestrator(planner.clone(), 5).run(TaskRequest::new("say hi")).await;

    assert!(report.is_completed());
    assert_eq!(report.turns, 2);
    assert_eq!(report.tool_sequence(), vec!["echo"]);

    let roles: Vec<_> = report.history.iter().map(|t| t.role).collect();
    assert_eq!(
        roles,
        vec![TurnRole::User, TurnRole::Assistant, TurnRole::Tool, TurnRole::Assistant]
    );
    let call_id = report.history[1].tool_call.as_ref().unwrap().id.clone();
    assert_eq!(report.history[2].tool_call_id.as_deref(), Some(call_id.as_str()));
    assert_eq!(report.history[2].content, "echo: hi");

    // The planner saw the full history each time.
    assert_eq!(planner.observed_history(), vec![1, 3]);
}

#[tokio::test]
async fn test_recoverable_failures_become_turns() {
    let planner = Arc::new(ScriptedPlanner::new(vec![
        PlannerDecision::call("needs_page", serde_json::json!({})),
        PlannerDecision::call("echo", serde_json::json!({"text": 7})),
        PlannerDecision::call("no_such_tool", serde_json::json!({})),
        PlannerDecision::complete("gave up politely"),
    ]));
    let report = orchestrator(planner, 10).run(TaskRequest::new("try things")).await;

    assert!(report.is_completed());
    let kinds: Vec<_> = report.invocations.iter().map(|i| i.failure_kind()).collect();
    assert_eq!(
        kinds,
        vec![
            Some(FailureKind::Precondition),
            Some(FailureKind::Validation),
            Some(FailureKind::UnknownTool),
        ]
    );
    let failed_turns = report.history.iter().filter(|t| t.is_failure()).count();
    assert_eq!(failed_turns, 3);
    assert!(report.history[2].content.contains("open a browser session first"));
}

#[tokio::test]
async fn test_turn_ceiling_reported_as_failed() {
    let decisions = (0..10).map(|_| PlannerDecision::call("needs_page", serde_json::json!({})));
    let planner = Arc::new(ScriptedPlanner::new(decisions));
    let report = orchestrator(planner.clone(), 3).run(TaskRequest::new("loop forever")).await;

    assert_eq!(report.status, RunStatus::Failed);
    assert_eq!(report.reason, Some(FailureReason::MaxTurnsExceeded { max_turns: 3 }));
    assert_eq!(report.turns, 3);
    assert_eq!(report.invocations.len(), 3);
    assert_eq!(planner.remaining(), 7);
}

#[tokio::test]
async fn test_request_overrides_max_turns() {
    let planner = Arc::new(ScriptedPlanner::new(vec![
        PlannerDecision::call("echo", serde_json::json!({"text": "a"})),
        PlannerDecision::complete("done"),
    ]));
    let report = orchestrator(planner, 20)
        .run(TaskRequest::new("short").with_max_turns(1))
        .await;

    assert_eq!(report.reason, Some(FailureReason::MaxTurnsExceeded { max_turns: 1 }));
    assert_eq!(report.turns, 1);
}

#[tokio::test]
async fn test_unrecoverable_failure_stops_run() {
    let planner = Arc::new(ScriptedPlanner::new(vec![
        PlannerDecision::call("crash", serde_json::json!({})),
        PlannerDecision::complete("never reached"),
    ]));
    let report = orchestrator(planner.clone(), 10).run(TaskRequest::new("crash")).await;

    assert_eq!(report.status, RunStatus::Failed);
    match report.reason {
        Some(FailureReason::Unrecoverable { ref tool, ref message }) => {
            assert_eq!(tool, "crash");
            assert!(message.contains("connection closed"));
        }
        ref other => panic!("Expected Unrecoverable, got {:?}", other),
    }
    assert_eq!(report.history.last().unwrap().failure, Some(FailureKind::Unrecoverable));
    assert_eq!(planner.remaining(), 1);
}

#[tokio::test]
async fn test_planner_failure_stops_run() {
    let planner = Arc::new(ScriptedPlanner::new(Vec::new()));
    let report = orchestrator(planner, 10).run(TaskRequest::new("anything")).await;

    assert_eq!(report.status, RunStatus::Failed);
    assert_eq!(report.reason.as_ref().map(|r| r.code()), Some("planner_failure"));
    assert_eq!(report.turns, 1);
}

#[tokio::test]
async fn test_seeded_history_precedes_task() {
    let planner = Arc::new(ScriptedPlanner::new(vec![PlannerDecision::complete("ok")]));
    let request = TaskRequest::new("continue")
        .with_history(vec![ConversationTurn::user("earlier"), ConversationTurn::assistant("noted")]);
    let report = orchestrator(planner.clone(), 5).run(request).await;

    assert_eq!(report.history[0].content, "earlier");
    assert_eq!(report.history[2].content, "continue");
    assert_eq!(planner.observed_history(), vec![3]);
}

#[tokio::test]
async fn test_zero_turns_fails_without_asking_planner() {
    let planner = Arc::new(ScriptedPlanner::new(vec![PlannerDecision::complete("ok")]));
    let report = orchestrator(planner.clone(), 0).run(TaskRequest::new("nothing")).await;

    assert_eq!(report.turns, 0);
    assert_eq!(report.status, RunStatus::Failed);
    assert!(planner.observed_history().is_empty());
}
