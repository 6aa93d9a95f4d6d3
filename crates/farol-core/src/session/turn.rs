//! Conversation turn types.
//!
//! This module contains types for representing turns in a conversation,
//! including roles and turn content.

use serde::{Deserialize, Serialize};

/// Represents the role of a turn in a conversation.
///
/// The hidden persona instruction is also tagged `User` — Gemini's
/// convention for priming behavior uses the user role for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    /// Turn authored by the user (including the hidden system instruction).
    User,
    /// Turn generated by the model.
    Model,
}

impl TurnRole {
    /// Role tag as the Gemini wire format expects it.
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Model => "model",
        }
    }
}

/// A single turn in a conversation history.
///
/// Each turn has a role, a single text content blob, and a timestamp
/// indicating when it was created. Content is immutable once created;
/// turns are only ever appended to a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The role of the turn author.
    pub role: TurnRole,
    /// The text content of the turn.
    pub content: String,
    /// Timestamp when the turn was created (ISO 8601 format).
    pub created_at: String,
}

impl Turn {
    /// Creates a turn with the given role and content, stamped now.
    pub fn new(role: TurnRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Creates a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(TurnRole::User, content)
    }

    /// Creates a model turn.
    pub fn model(content: impl Into<String>) -> Self {
        Self::new(TurnRole::Model, content)
    }
}
