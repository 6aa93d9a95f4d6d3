//! Farol server binary.
//!
//! Loads settings, wires the Gemini client into the dispatcher, and serves
//! the chat UI and API.

mod error;
mod handlers;
mod routes;
mod state;

use farol_core::Settings;
use farol_interaction::{GeminiClient, TurnDispatcher};
use state::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up GOOGLE_API_KEY from a local .env file, if present.
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    // Missing credential halts here, before any UI interaction is possible.
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("{err}");
            return Err(err.into());
        }
    };

    let client = GeminiClient::new(settings.api_key.clone(), settings.model.clone());
    let dispatcher = TurnDispatcher::new(Arc::new(client));
    let state = AppState::new(dispatcher);

    tracing::info!(model = %settings.model, "starting farol");
    routes::start_server(&settings.addr, state).await?;

    Ok(())
}
