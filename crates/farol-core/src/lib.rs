pub mod error;
pub mod persona;
pub mod session;
pub mod settings;

// Re-export common error type
pub use error::{FarolError, Result};
pub use session::{ChatSession, Conversation, Turn, TurnRole};
pub use settings::Settings;
