//! Application state shared across all route handlers.

use farol_core::ChatSession;
use farol_interaction::TurnDispatcher;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// In-memory registry of live sessions.
///
/// Sessions exist only for the lifetime of the process; nothing is
/// persisted. Each session sits behind its own `Mutex`, which serializes
/// dispatch per session — one in-flight generation call at a time, matching
/// the UI's blocking input model.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<String, Arc<Mutex<ChatSession>>>>>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new seeded session and returns its handle.
    pub async fn create(&self) -> Arc<Mutex<ChatSession>> {
        let id = uuid::Uuid::new_v4().to_string();
        let session = Arc::new(Mutex::new(ChatSession::new(id.clone())));

        let mut sessions = self.sessions.write().await;
        sessions.insert(id, session.clone());
        session
    }

    /// Looks up a session by ID.
    pub async fn get(&self, session_id: &str) -> Option<Arc<Mutex<ChatSession>>> {
        let sessions = self.sessions.read().await;
        sessions.get(session_id).cloned()
    }
}

/// Shared application state, passed to handlers via axum's State extractor.
///
/// All fields are `Arc`-backed for cheap cloning across handler tasks.
#[derive(Clone)]
pub struct AppState {
    /// Live sessions for this process.
    pub sessions: SessionRegistry,
    /// Dispatcher mediating calls to the generation service.
    pub dispatcher: Arc<TurnDispatcher>,
}

impl AppState {
    /// Creates a new AppState around the given dispatcher.
    pub fn new(dispatcher: TurnDispatcher) -> Self {
        Self {
            sessions: SessionRegistry::new(),
            dispatcher: Arc::new(dispatcher),
        }
    }
}
