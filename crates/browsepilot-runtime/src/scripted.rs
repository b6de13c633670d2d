//! A planner that replays a fixed list of decisions.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use browsepilot_protocols::error::PlannerError;
use browsepilot_protocols::planner::{Planner, PlannerDecision};
use browsepilot_protocols::tool::ToolDefinition;
use browsepilot_protocols::types::ConversationTurn;

/// Replays decisions in order; errors once the script runs out.
///
/// Used for deterministic runs (`--plan`) and tests.
pub struct ScriptedPlanner {
    decisions: Mutex<VecDeque<PlannerDecision>>,
    consumed: Mutex<usize>,
    observed_history: Mutex<Vec<usize>>,
}

impl ScriptedPlanner {
    pub fn new(decisions: impl IntoIterator<Item = PlannerDecision>) -> Self {
        Self {
            decisions: Mutex::new(decisions.into_iter().collect()),
            consumed: Mutex::new(0),
            observed_history: Mutex::new(Vec::new()),
        }
    }

    /// Parse a JSON array of decisions.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let decisions: Vec<PlannerDecision> = serde_json::from_str(json)?;
        Ok(Self::new(decisions))
    }

    /// Decisions not yet handed out.
    pub fn remaining(&self) -> usize {
        self.decisions.lock().len()
    }

    /// History length seen by each `decide` call.
    pub fn observed_history(&self) -> Vec<usize> {
        self.observed_history.lock().clone()
    }
}

#[async_trait]
impl Planner for ScriptedPlanner {
    fn id(&self) -> &str {
        "scripted"
    }

    async fn decide(
        &self,
        _task: &str,
        history: &[ConversationTurn],
        _catalog: &[ToolDefinition],
    ) -> Result<PlannerDecision, PlannerError> {
        self.observed_history.lock().push(history.len());
        let next = self.decisions.lock().pop_front();
        let mut consumed = self.consumed.lock();
        match next {
            Some(decision) => {
                *consumed += 1;
                Ok(decision)
            }
            None => Err(PlannerError::Exhausted(*consumed)),
        }
    }
}
