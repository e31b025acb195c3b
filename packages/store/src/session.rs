//! # Session store: the one piece of persisted client state
//!
//! The portal keeps exactly one value across page reloads: the opaque bearer
//! token returned by the SSO service on login. Everything else (identity,
//! role, expiry) is derived from it on demand by the token decoder in the
//! `api` crate.
//!
//! [`SessionStore`] is the seam. Login and logout are the only writers; the
//! API client and the UI read it at the moment they need the token, never
//! caching it. Implementations:
//!
//! | Type | Backing | Used by |
//! |------|---------|---------|
//! | [`crate::MemoryStore`] | process memory | tests, native builds |
//! | `LocalStorageStore` | `window.localStorage["token"]` | the browser build (`web` feature) |

use std::sync::Arc;

/// The well-known storage key the bearer token lives under.
pub const TOKEN_KEY: &str = "token";

/// Holder of the bearer token.
///
/// An empty stored string is indistinguishable from "no token": both read
/// back as `None`.
pub trait SessionStore {
    /// Current token, if one is stored.
    fn get_token(&self) -> Option<String>;

    /// Replace the stored token.
    fn set_token(&self, token: &str);

    /// Forget the stored token.
    fn clear_token(&self);

    /// Whether a token is currently stored.
    fn has_token(&self) -> bool {
        self.get_token().is_some()
    }
}

/// Shared handle injected into the API client and the UI context.
pub type SharedSession = Arc<dyn SessionStore + Send + Sync>;

pub(crate) fn non_empty(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.trim().is_empty())
}
