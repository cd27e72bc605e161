//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! owns exactly one `Session` — the process-lifetime drawing session —
//! created in `main` and torn down at process exit. Nothing here is global:
//! the authoritative log and connection registry live behind one lock, and
//! the user count is always derived from the registry rather than tracked
//! separately.

use std::collections::HashMap;
use std::sync::Arc;

use events::{DrawingEvent, ServerMessage};
use tokio::sync::{RwLock, mpsc};
use uuid::Uuid;

/// Live session state: the authoritative event log and the connection
/// registry.
pub struct Session {
    /// Authoritative ordered log of drawing events. Reset only by a clear.
    pub history: Vec<DrawingEvent>,
    /// Connected clients: connection id -> sender for outgoing messages.
    pub clients: HashMap<Uuid, mpsc::Sender<ServerMessage>>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self { history: Vec::new(), clients: HashMap::new() }
    }

    /// Current connection count.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.clients.len()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared application state, injected into Axum handlers via the State
/// extractor. Clone is required by Axum — the session is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<Session>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self { session: Arc::new(RwLock::new(Session::new())) }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_new_is_empty() {
        let session = Session::new();
        assert!(session.history.is_empty());
        assert!(session.clients.is_empty());
        assert_eq!(session.user_count(), 0);
    }

    #[tokio::test]
    async fn app_state_clones_share_the_session() {
        let state = AppState::new();
        let other = state.clone();

        state.session.write().await.history.push(
            events::DrawingEvent::fill(events::Point::new(1.0, 1.0), "#ff0000").unwrap(),
        );

        assert_eq!(other.session.read().await.history.len(), 1);
    }
}
