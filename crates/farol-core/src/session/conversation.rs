//! Append-only conversation history.

use super::turn::{Turn, TurnRole};
use crate::persona::SYSTEM_PROMPT;
use serde::{Deserialize, Serialize};

/// An ordered, append-only sequence of turns for one session.
///
/// Insertion order is chronological order and is the order replayed both to
/// the UI and to the generation API. Once initialized, index 0 always holds
/// the hidden system turn carrying [`SYSTEM_PROMPT`]; that turn is excluded
/// from [`Conversation::visible_turns`] by content comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    /// Creates an empty, un-seeded conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the conversation with the hidden system turn.
    ///
    /// Idempotent: calling it again once a conversation exists is a no-op,
    /// so a re-executed UI pass cannot re-seed history.
    pub fn initialize(&mut self) {
        if self.turns.is_empty() {
            self.turns.push(Turn::new(TurnRole::User, SYSTEM_PROMPT));
        }
    }

    /// Appends a turn to the end of the history.
    ///
    /// No validation beyond non-empty content, no deduplication. Empty
    /// content is silently ignored (the UI never produces it; the HTTP
    /// boundary rejects it before reaching here).
    pub fn append(&mut self, turn: Turn) {
        if !turn.content.is_empty() {
            self.turns.push(turn);
        }
    }

    /// The full ordered history, system turn included.
    ///
    /// This is the shape sent to the generation API.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Ordered iterator over turns that should be rendered.
    ///
    /// Excludes any turn whose content equals the system-prompt text.
    /// Restartable: each call yields a fresh iterator over the same data.
    pub fn visible_turns(&self) -> impl Iterator<Item = &Turn> {
        self.turns
            .iter()
            .filter(|turn| turn.content != SYSTEM_PROMPT)
    }

    /// Total number of turns, system turn included.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// True before `initialize` has run.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
