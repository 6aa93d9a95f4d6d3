//! External-generation layer: the Gemini REST client, the service trait the
//! dispatcher talks through, and the dispatcher itself.

pub mod dispatcher;
pub mod gemini;
pub mod service;

pub use dispatcher::TurnDispatcher;
pub use gemini::GeminiClient;
pub use service::GenerateService;
