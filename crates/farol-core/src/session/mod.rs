//! Session domain module.
//!
//! This module contains the conversation domain models and the per-session
//! store that holds them.
//!
//! # Module Structure
//!
//! - `turn`: Conversation turn types (`TurnRole`, `Turn`)
//! - `conversation`: Append-only conversation history (`Conversation`)
//! - `store`: Session-scoped conversation store (`ChatSession`)

mod conversation;
mod store;
mod turn;

// Re-export public API
pub use conversation::Conversation;
pub use store::ChatSession;
pub use turn::{Turn, TurnRole};
