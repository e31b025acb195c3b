//! # `localStorage`-backed session store: browser-side persistence
//!
//! [`LocalStorageStore`] is the [`SessionStore`] used by the web build. The
//! token survives page reloads until logout or a storage wipe.
//!
//! The struct holds only the key name; `window.localStorage` is looked up on
//! every call, which keeps the store `Send + Sync` and `Clone`.
//!
//! Storage can be unavailable (private browsing quotas, disabled storage,
//! sandboxed iframes). Every failure degrades to "no token" and is logged at
//! `warn`; the user simply appears logged out.

use web_sys::Storage;

use crate::session::{non_empty, SessionStore, TOKEN_KEY};

/// `window.localStorage`-backed token store.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorageStore {
    /// Store under the well-known `"token"` key.
    pub fn new() -> Self {
        Self::with_key(TOKEN_KEY)
    }

    /// Store under a custom key.
    pub fn with_key(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage() -> Option<Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl SessionStore for LocalStorageStore {
    fn get_token(&self) -> Option<String> {
        let storage = Self::storage()?;
        match storage.get_item(&self.key) {
            Ok(value) => non_empty(value),
            Err(e) => {
                tracing::warn!("Failed to read session token: {:?}", e);
                None
            }
        }
    }

    fn set_token(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.set_item(&self.key, token) {
            tracing::warn!("Failed to persist session token: {:?}", e);
        }
    }

    fn clear_token(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(&self.key) {
            tracing::warn!("Failed to clear session token: {:?}", e);
        }
    }
}
