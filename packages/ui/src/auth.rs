//! Session context and guards for the UI.
//!
//! [`SessionProvider`] puts the [`ApiClient`] and the decoded [`Identity`]
//! into context. The identity signal is refreshed after login and cleared on
//! logout; everything that renders per-role reads it through
//! [`use_identity`].

use std::time::Duration;

use api::jwt;
use api::{ApiClient, Identity};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::toast::{push_error, sleep, use_toasts};

/// Shown when a protected page finds the stored token past its expiry.
pub const SESSION_EXPIRED: &str = "Your session has expired, please log in again";

/// How often a mounted [`RequireSession`] re-checks the token's expiry.
const EXPIRY_CHECK_INTERVAL: Duration = Duration::from_secs(30);

/// Client handle plus the identity derived from its stored token.
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub client: ApiClient,
    pub identity: Signal<Identity>,
}

impl SessionContext {
    /// Re-read the identity from the stored token.
    pub fn refresh(&mut self) {
        self.identity.set(self.client.identity());
    }

    /// Drop the stored token locally without telling the SSO service.
    pub fn end(&mut self) {
        self.client.session().clear_token();
        self.identity.set(Identity::default());
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus::evaluate(&self.client.identity(), jwt::now_secs())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    /// No token, or one that does not decode.
    Missing,
    Expired,
}

impl SessionStatus {
    pub fn evaluate(identity: &Identity, now_secs: i64) -> Self {
        if identity.is_empty() {
            SessionStatus::Missing
        } else if identity.is_expired(now_secs) {
            SessionStatus::Expired
        } else {
            SessionStatus::Active
        }
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

pub fn use_api() -> ApiClient {
    use_session().client
}

pub fn use_identity() -> Signal<Identity> {
    use_session().identity
}

/// Wrap the app with this to make the session available below it.
#[component]
pub fn SessionProvider(client: ApiClient, children: Element) -> Element {
    let initial = client.identity();
    let identity = use_signal(move || initial);
    use_context_provider(move || SessionContext { client, identity });

    rsx! {
        {children}
    }
}

/// Guards protected pages.
///
/// Without a usable token the user is sent to `login`. An expired
/// token is cleared first and the user is told why. The check runs on every
/// render and again every thirty seconds while the page stays open.
#[component]
pub fn RequireSession<R: Routable + PartialEq>(login: R, children: Element) -> Element {
    let mut session = use_session();
    let mut toasts = use_toasts();
    let navigator = use_navigator();
    let mut tick = use_signal(|| 0u64);

    use_future(move || async move {
        loop {
            sleep(EXPIRY_CHECK_INTERVAL).await;
            *tick.write() += 1;
        }
    });

    let _ = tick();
    let status = session.status();

    use_effect(use_reactive!(|(status, login)| {
        if status == SessionStatus::Active {
            return;
        }
        if status == SessionStatus::Expired {
            tracing::info!("Session token expired, signing out");
            push_error(&mut toasts, SESSION_EXPIRED);
        }
        session.end();
        navigator.replace(login);
    }));

    if status != SessionStatus::Active {
        return rsx! {};
    }

    rsx! {
        {children}
    }
}

/// Logs out with the SSO service, clears the token and goes to `redirect`.
#[component]
pub fn LogoutButton<R: Routable + PartialEq>(
    redirect: R,
    #[props(default = "Log out".to_string())] label: String,
    #[props(default)] class: String,
) -> Element {
    let session = use_session();
    let navigator = use_navigator();
    let mut pending = use_signal(|| false);

    let onclick = move |_| {
        let redirect = redirect.clone();
        let mut session = session.clone();
        async move {
            if pending() {
                return;
            }
            pending.set(true);
            session.client.sso().logout().await;
            session.refresh();
            pending.set(false);
            navigator.replace(redirect);
        }
    };

    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            class,
            disabled: pending(),
            onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(expiry: i64) -> Identity {
        Identity {
            subject: "0101990710006".to_string(),
            expiry,
            ..Identity::default()
        }
    }

    #[test]
    fn test_status_active_until_expiry() {
        assert_eq!(SessionStatus::evaluate(&identity(1_000), 999), SessionStatus::Active);
        assert_eq!(SessionStatus::evaluate(&identity(1_000), 1_000), SessionStatus::Expired);
        assert_eq!(SessionStatus::evaluate(&identity(0), i64::MAX), SessionStatus::Active);
    }

    #[test]
    fn test_status_missing_without_subject() {
        assert_eq!(SessionStatus::evaluate(&Identity::default(), 0), SessionStatus::Missing);
    }
}
