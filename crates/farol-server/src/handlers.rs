//! Route handlers for the chat UI and JSON API.

use crate::error::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::Html;
use farol_core::{FarolError, Turn};
use serde::{Deserialize, Serialize};

/// Embedded single-page chat UI.
const INDEX_HTML: &str = include_str!("../assets/index.html");

/// GET / - serve the chat page.
pub async fn ui() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /health - liveness check.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Response body for session creation.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionCreated {
    /// The new session's ID.
    pub id: String,
}

/// POST /api/sessions - create a new chat session.
pub async fn create_session(State(state): State<AppState>) -> Json<SessionCreated> {
    let session = state.sessions.create().await;
    let id = session.lock().await.id.clone();
    tracing::info!(session = %id, "created session");
    Json(SessionCreated { id })
}

/// Response body listing the renderable turns of a session.
#[derive(Debug, Serialize, Deserialize)]
pub struct TurnList {
    pub turns: Vec<Turn>,
}

/// GET /api/sessions/{id}/turns - visible turns in replay order.
pub async fn list_turns(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<TurnList>, ApiError> {
    let session = state
        .sessions
        .get(&session_id)
        .await
        .ok_or_else(|| FarolError::SessionNotFound(session_id.clone()))?;

    let session = session.lock().await;
    Ok(Json(TurnList {
        turns: session.visible_turns().cloned().collect(),
    }))
}

/// Request body for submitting a user message.
#[derive(Debug, Serialize, Deserialize)]
pub struct SendMessage {
    pub text: String,
}

/// POST /api/sessions/{id}/messages - run one exchange with the model.
///
/// Holds the session lock across the generation call, so a session can have
/// at most one exchange in flight. On failure the user turn stays in
/// history and the error detail is returned for the UI's error banner.
pub async fn post_message(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<SendMessage>,
) -> Result<Json<Turn>, ApiError> {
    if request.text.trim().is_empty() {
        return Err(FarolError::EmptyMessage.into());
    }

    let session = state
        .sessions
        .get(&session_id)
        .await
        .ok_or_else(|| FarolError::SessionNotFound(session_id.clone()))?;

    let mut session = session.lock().await;
    let reply = state.dispatcher.handle(&mut session, &request.text).await?;

    Ok(Json(reply))
}
