//! # Token decoder
//!
//! Reads the payload segment of the SSO bearer token and turns it into an
//! [`Identity`]. The signature is never checked here; the services verify
//! tokens on every request, and the client only uses the claims to decide
//! what to render and which subject (JMBG) to ask about.
//!
//! Decoding fails soft: an empty, truncated or otherwise malformed token
//! yields [`Identity::default`] (empty subject, no role, zero expiry), so
//! callers branch on emptiness or role and never handle a decode error. A
//! payload without a subject is treated the same way, which guarantees that
//! nothing short of a well-formed token can carry the `ADMIN` role.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Portal roles as issued by the SSO service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }

    /// Parse a claim value; unknown roles map to `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "USER" => Some(Role::User),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// Who the current token says the user is. Derived, never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Identity {
    /// Subject claim; the JMBG for citizens.
    pub subject: String,
    pub name: String,
    pub role: Option<Role>,
    /// Expiry as seconds since the Unix epoch; 0 when absent.
    pub expiry: i64,
}

impl Identity {
    /// True for the zero-value identity of an absent or malformed token.
    pub fn is_empty(&self) -> bool {
        self.subject.is_empty()
    }

    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }

    /// Whether the role is one of `allowed`. Always false without a role.
    pub fn has_role_in(&self, allowed: &[Role]) -> bool {
        self.role.is_some_and(|role| allowed.contains(&role))
    }

    /// Whether the token's `exp` lies at or before `now_secs`.
    /// Tokens without an `exp` claim never expire client-side.
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.expiry > 0 && self.expiry <= now_secs
    }
}

#[derive(Debug, Default, Deserialize)]
struct Claims {
    #[serde(default)]
    sub: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    role: String,
    #[serde(default)]
    exp: i64,
}

#[derive(Debug, thiserror::Error)]
enum DecodeError {
    #[error("token has no payload segment")]
    MissingPayload,
    #[error("payload is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not a claims object: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode a bearer token into an [`Identity`]. Never fails.
pub fn decode(token: &str) -> Identity {
    match decode_claims(token) {
        Ok(claims) if !claims.sub.trim().is_empty() => Identity {
            subject: claims.sub,
            name: claims.name,
            role: Role::parse(&claims.role),
            expiry: claims.exp,
        },
        Ok(_) => {
            tracing::debug!("Token payload has no subject, treating as anonymous");
            Identity::default()
        }
        Err(e) => {
            if !token.is_empty() {
                tracing::debug!("Discarding undecodable token: {}", e);
            }
            Identity::default()
        }
    }
}

/// Decode an optional token; `None` yields the zero-value identity.
pub fn decode_optional(token: Option<&str>) -> Identity {
    token.map(decode).unwrap_or_default()
}

fn decode_claims(token: &str) -> Result<Claims, DecodeError> {
    let payload = token
        .trim()
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or(DecodeError::MissingPayload)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Current time in seconds since the Unix epoch.
pub fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Unsigned test token carrying `claims` as its payload.
    pub(crate) fn make_token(claims: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
        format!("{header}.{payload}.c2lnbmF0dXJl")
    }

    #[test]
    fn test_decode_citizen_token() {
        let token = make_token(serde_json::json!({
            "sub": "0101990710006",
            "name": "Petar Petrovic",
            "role": "USER",
            "exp": 1_900_000_000i64
        }));

        let identity = decode(&token);
        assert_eq!(identity.subject, "0101990710006");
        assert_eq!(identity.name, "Petar Petrovic");
        assert_eq!(identity.role, Some(Role::User));
        assert_eq!(identity.expiry, 1_900_000_000);
        assert!(!identity.is_admin());
        assert!(!identity.is_empty());
    }

    #[test]
    fn test_decode_admin_token() {
        let token = make_token(serde_json::json!({"sub": "admin@mup.rs", "role": "ADMIN", "exp": 10}));
        let identity = decode(&token);
        assert!(identity.is_admin());
        assert!(identity.has_role_in(&[Role::Admin]));
        assert!(!identity.has_role_in(&[Role::User]));
    }

    #[test]
    fn test_malformed_tokens_yield_zero_identity() {
        let garbage = [
            "",
            "   ",
            "not-a-token",
            "a.b",
            "a..c",
            "header.%%%%.sig",
            &format!("x.{}.y", URL_SAFE_NO_PAD.encode("not json")),
            &format!("x.{}.y", URL_SAFE_NO_PAD.encode("[1,2,3]")),
        ];
        for token in garbage {
            let identity = decode(token);
            assert_eq!(identity, Identity::default(), "token {token:?}");
            assert!(!identity.is_admin());
        }
    }

    #[test]
    fn test_admin_role_without_subject_is_not_granted() {
        let token = make_token(serde_json::json!({"role": "ADMIN"}));
        let identity = decode(&token);
        assert!(identity.is_empty());
        assert!(!identity.is_admin());
    }

    #[test]
    fn test_unknown_role_maps_to_none() {
        let token = make_token(serde_json::json!({"sub": "1", "role": "SUPERUSER"}));
        let identity = decode(&token);
        assert_eq!(identity.role, None);
        assert!(!identity.has_role_in(&[Role::User, Role::Admin]));
    }

    #[test]
    fn test_padded_payload_is_accepted() {
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"sub":"123"}"#);
        assert!(payload.ends_with('='));
        let identity = decode(&format!("h.{payload}.s"));
        assert_eq!(identity.subject, "123");
    }

    #[test]
    fn test_expiry() {
        let identity = Identity {
            subject: "1".into(),
            expiry: 100,
            ..Identity::default()
        };
        assert!(!identity.is_expired(99));
        assert!(identity.is_expired(100));
        assert!(identity.is_expired(101));

        let no_exp = Identity {
            subject: "1".into(),
            ..Identity::default()
        };
        assert!(!no_exp.is_expired(i64::MAX));
    }

    #[test]
    fn test_decode_optional_none() {
        assert_eq!(decode_optional(None), Identity::default());
    }
}
