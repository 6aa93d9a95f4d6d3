//! Error types for the Farol application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Farol application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum FarolError {
    /// Configuration error (missing or invalid settings), fatal at startup
    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-success HTTP response from the generation API
    #[error("Generation API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Transport failure reaching the generation API
    #[error("Generation request failed: {0}")]
    Http(String),

    /// The generation API answered but returned no text candidate
    #[error("Generation API returned no text in the response candidates")]
    EmptyResponse,

    /// Unknown session identifier
    #[error("Session not found: '{0}'")]
    SessionNotFound(String),

    /// Rejected empty user input
    #[error("Message text must not be empty")]
    EmptyMessage,

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FarolError {
    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Api error from an HTTP status and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// True for failures of the external generation call, the class the
    /// dispatcher recovers from without marking the session broken.
    pub fn is_dispatch_failure(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::Http(_) | Self::EmptyResponse)
    }
}

impl From<reqwest::Error> for FarolError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

impl From<serde_json::Error> for FarolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON error: {err}"))
    }
}

/// A type alias for `Result<T, FarolError>`.
pub type Result<T> = std::result::Result<T, FarolError>;
