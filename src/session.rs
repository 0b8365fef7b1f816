//! Caller-owned conversation state.
//!
//! The pipeline answers each query independently; it never reads or writes
//! history. These types exist so callers (a chat UI, a CLI loop) have a
//! well-defined append-only structure to hold turns for display.

use serde::{Deserialize, Serialize};

/// One completed question/answer exchange.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationTurn {
    /// The user's question.
    pub query: String,
    /// The generated answer.
    pub answer: String,
}

/// An append-only, ordered sequence of [`ConversationTurn`]s.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatHistory {
    turns: Vec<ConversationTurn>,
}

impl ChatHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed turn.
    pub fn push(&mut self, query: impl Into<String>, answer: impl Into<String>) {
        self.turns.push(ConversationTurn { query: query.into(), answer: answer.into() });
    }

    /// Iterate over turns in order.
    pub fn iter(&self) -> impl Iterator<Item = &ConversationTurn> {
        self.turns.iter()
    }

    /// Number of turns recorded.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether no turns have been recorded.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
