//! Role-based rendering.
//!
//! Gating is cosmetic: it decides what a user is offered, while the services
//! enforce authorization on every request.

use api::{Identity, Role};
use dioxus::prelude::*;

use crate::auth::use_session;

/// Whether `identity` may see content restricted to `allowed`.
/// Absent, malformed or role-less tokens see nothing restricted.
pub fn role_allows(identity: &Identity, allowed: &[Role]) -> bool {
    !identity.is_empty() && identity.has_role_in(allowed)
}

/// Whether the signed-in user holds one of `allowed`.
///
/// The stored token is decoded on every call; the identity signal is only
/// read so that login and logout re-render the caller.
pub fn use_role_allows(allowed: &[Role]) -> bool {
    let session = use_session();
    let _ = session.identity.read();
    role_allows(&session.client.identity(), allowed)
}

/// Renders `children` only for the given roles, `fallback` otherwise.
#[component]
pub fn RoleGate(allowed: Vec<Role>, fallback: Option<Element>, children: Element) -> Element {
    if use_role_allows(&allowed) {
        rsx! { {children} }
    } else {
        rsx! { {fallback} }
    }
}

/// Shorthand for content only administrators see.
#[component]
pub fn AdminOnly(children: Element) -> Element {
    rsx! {
        RoleGate { allowed: vec![Role::Admin], {children} }
    }
}

/// Content for signed-in users who are not administrators.
#[component]
pub fn CitizenOnly(children: Element) -> Element {
    rsx! {
        RoleGate { allowed: vec![Role::User], {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(subject: &str, role: Option<Role>) -> Identity {
        Identity {
            subject: subject.to_string(),
            role,
            ..Identity::default()
        }
    }

    #[test]
    fn test_admin_sees_admin_content() {
        assert!(role_allows(&identity("admin@mup.rs", Some(Role::Admin)), &[Role::Admin]));
        assert!(!role_allows(&identity("0101990710006", Some(Role::User)), &[Role::Admin]));
    }

    #[test]
    fn test_missing_identity_sees_nothing() {
        assert!(!role_allows(&Identity::default(), &[Role::User, Role::Admin]));
        assert!(!role_allows(&identity("1", None), &[Role::User]));
    }

    #[test]
    fn test_role_without_subject_is_refused() {
        assert!(!role_allows(&identity("", Some(Role::Admin)), &[Role::Admin]));
    }
}
