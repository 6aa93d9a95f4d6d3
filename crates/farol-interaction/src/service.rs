//! Generation service trait.
//!
//! Defines the seam between the dispatcher and whatever produces model
//! turns. The production implementation is [`crate::gemini::GeminiClient`];
//! tests substitute mocks.

use farol_core::{Result, Turn};

/// A service that turns an ordered conversation history into generated text.
///
/// The history is the complete conversation, hidden system turn and latest
/// user turn included, in replay order. Implementations must treat the call
/// as atomic: either the full generated text or an error, never a partial
/// response.
#[async_trait::async_trait]
pub trait GenerateService: Send + Sync {
    /// Generates the next model reply for the given history.
    async fn generate(&self, history: &[Turn]) -> Result<String>;
}
