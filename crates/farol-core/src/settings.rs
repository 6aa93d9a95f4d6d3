//! Runtime settings loaded from the environment at process start.

use crate::error::{FarolError, Result};

/// Default Gemini model used when `FAROL_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default bind address for the HTTP server.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3030";

/// Runtime settings for the application.
///
/// The API key is required; everything else has a default. Loading happens
/// once at startup, before any external call is possible.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Google Gemini API key.
    pub api_key: String,
    /// Gemini model identifier.
    pub model: String,
    /// Address the HTTP server binds to.
    pub addr: String,
}

impl Settings {
    /// Loads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a Config error if `GOOGLE_API_KEY` is missing or blank.
    /// The error message never contains the key itself.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GOOGLE_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                FarolError::config(
                    "GOOGLE_API_KEY is not set. Create a .env file with GOOGLE_API_KEY='YOUR_KEY' \
                     or export it before starting.",
                )
            })?;

        let model =
            std::env::var("FAROL_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let addr = std::env::var("FAROL_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

        Ok(Self {
            api_key,
            model,
            addr,
        })
    }
}
