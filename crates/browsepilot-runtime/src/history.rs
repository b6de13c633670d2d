//! Conversation history.

use browsepilot_protocols::types::ConversationTurn;

/// Append-only, ordered record of a run's turns.
#[derive(Debug, Clone, Default)]
pub struct ConversationHistory {
    turns: Vec<ConversationTurn>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// Start from previously recorded turns.
    pub fn seeded(turns: Vec<ConversationTurn>) -> Self {
        Self { turns }
    }

    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&ConversationTurn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn into_turns(self) -> Vec<ConversationTurn> {
        self.turns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use browsepilot_protocols::types::TurnRole;

    #[test]
    fn test_history_new() {
        let history = ConversationHistory::new();
        assert!(history.is_empty());
        assert!(history.last().is_none());
    }

    #[test]
    fn test_history_push_keeps_order() {
        let mut history = ConversationHistory::new();
        history.push(ConversationTurn::user("task"));
        history.push(ConversationTurn::assistant("thinking"));
        history.push(ConversationTurn::tool_success("call_1", "done"));

        assert_eq!(history.len(), 3);
        let roles: Vec<_> = history.turns().iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![TurnRole::User, TurnRole::Assistant, TurnRole::Tool]);
        assert_eq!(history.last().unwrap().content, "done");
    }

    #[test]
    fn test_history_seeded() {
        let history = ConversationHistory::seeded(vec![ConversationTurn::user("earlier")]);
        assert_eq!(history.len(), 1);
        assert_eq!(history.into_turns()[0].content, "earlier");
    }
}
