//! Router setup and server startup.

use crate::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use farol_core::{FarolError, Result};
use tower_http::trace::TraceLayer;

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::ui))
        .route("/health", get(handlers::health))
        .route("/api/sessions", post(handlers::create_session))
        .route("/api/sessions/{id}/turns", get(handlers::list_turns))
        .route("/api/sessions/{id}/messages", post(handlers::post_message))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server on the given address.
pub async fn start_server(addr: &str, state: AppState) -> Result<()> {
    let router = create_router(state);

    tracing::info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| FarolError::config(format!("Failed to bind {addr}: {e}")))?;

    axum::serve(listener, router)
        .await
        .map_err(|e| FarolError::internal(format!("Server error: {e}")))?;

    Ok(())
}
