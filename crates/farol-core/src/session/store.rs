//! Session-scoped conversation store.

use super::conversation::Conversation;
use super::turn::Turn;
use serde::{Deserialize, Serialize};

/// Holds the conversation for the lifetime of one user session.
///
/// This is an explicit session object passed by handle into the dispatcher
/// and the HTTP layer; there is no ambient global state. The session lives
/// for the duration of one browser session and is dropped with it — nothing
/// is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    /// Unique session identifier (UUID format).
    pub id: String,
    /// Timestamp when the session was created (ISO 8601 format).
    pub created_at: String,
    conversation: Conversation,
}

impl ChatSession {
    /// Creates a new session with a freshly seeded conversation.
    pub fn new(id: impl Into<String>) -> Self {
        let mut conversation = Conversation::new();
        conversation.initialize();

        Self {
            id: id.into(),
            created_at: chrono::Utc::now().to_rfc3339(),
            conversation,
        }
    }

    /// Appends a turn to the session's conversation.
    pub fn append(&mut self, turn: Turn) {
        self.conversation.append(turn);
    }

    /// The full ordered history, system turn included.
    pub fn turns(&self) -> &[Turn] {
        self.conversation.turns()
    }

    /// Ordered iterator over renderable turns (system turn excluded).
    pub fn visible_turns(&self) -> impl Iterator<Item = &Turn> {
        self.conversation.visible_turns()
    }
}
