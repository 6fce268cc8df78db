use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::ai::chat::{Session, SharedChatService, from_config};
use crate::core::AppConfig;

/// A session behind an async lock so one exchange runs at a time and
/// the lock can be held while waiting on the chat service.
pub type SessionHandle = Arc<Mutex<Session>>;

/// Sessions live in memory until the widget closes them with
/// `DELETE /api/sessions/{id}` or the process exits. A widget that goes
/// away without closing its session leaves it here.
pub struct AppState {
    pub sessions: HashMap<String, SessionHandle>,
    pub service: SharedChatService,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_service(from_config(config))
    }

    pub fn with_service(service: SharedChatService) -> Self {
        Self {
            sessions: HashMap::new(),
            service,
        }
    }

    /// Creates and initializes a new session and returns its handle.
    pub fn open_session(&mut self) -> SessionHandle {
        let mut session = Session::new(Arc::clone(&self.service));
        session.initialize();
        let id = session.id.clone();
        let handle = Arc::new(Mutex::new(session));
        self.sessions.insert(id, Arc::clone(&handle));
        handle
    }

    pub fn session(&self, id: &str) -> Option<SessionHandle> {
        self.sessions.get(id).cloned()
    }

    /// Drops the session. Returns false if there was no such session.
    pub fn dispose_session(&mut self, id: &str) -> bool {
        self.sessions.remove(id).is_some()
    }
}
