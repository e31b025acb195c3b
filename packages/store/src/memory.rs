use std::sync::{Arc, Mutex};

use crate::session::{non_empty, SessionStore};

/// In-memory SessionStore for testing and native builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that starts out holding `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store.set_token(&token.into());
        store
    }
}

impl SessionStore for MemoryStore {
    fn get_token(&self) -> Option<String> {
        let guard = self.token.lock().unwrap_or_else(|e| e.into_inner());
        non_empty(guard.clone())
    }

    fn set_token(&self, token: &str) {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
    }

    fn clear_token(&self) {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}
