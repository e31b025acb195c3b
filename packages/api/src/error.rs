//! API client error types.
//!
//! Transport failures, server-reported validation failures (4xx) and server
//! faults (5xx) all surface to the user the same way: a notification carrying
//! a best-effort message. [`ApiError::user_message`] is that message: the
//! `message` field of the JSON error body when the service sent one, else the
//! fallback string of the operation that failed. Nothing is retried.

/// Errors from backend calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never got a response (DNS, connection refused, CORS, timeout).
    #[error("{message}")]
    Transport {
        endpoint: String,
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// The service rejected the request with a 4xx status.
    #[error("{message}")]
    Rejected {
        endpoint: String,
        status: u16,
        message: String,
    },
    /// The service failed with a 5xx status.
    #[error("{message}")]
    Server {
        endpoint: String,
        status: u16,
        message: String,
    },
    /// A 2xx response whose body did not match the expected shape.
    #[error("{message}")]
    Decode {
        endpoint: String,
        message: String,
        #[source]
        source: serde_json::Error,
    },
    /// A service base URL could not be parsed.
    #[error("Invalid service URL {url}")]
    InvalidUrl { url: String },
    /// The HTTP client could not be constructed.
    #[error("Failed to initialise the HTTP client: {0}")]
    Setup(#[source] reqwest::Error),
    /// An authenticated call was attempted without a stored token.
    #[error("You are not logged in")]
    NotAuthenticated,
    /// The service exposes no liveness route to ping.
    #[error("The {0} service cannot be pinged")]
    NotPingable(&'static str),
}

impl ApiError {
    /// Message suitable for a toast.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// HTTP status, when the service answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } | ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure means the caller's credentials were not accepted.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::NotAuthenticated) || matches!(self.status(), Some(401))
    }

    pub(crate) fn from_status(endpoint: &str, status: u16, body: &str, fallback: &str) -> Self {
        let message = extract_message(body).unwrap_or_else(|| fallback.to_string());
        if status >= 500 {
            ApiError::Server {
                endpoint: endpoint.to_string(),
                status,
                message,
            }
        } else {
            ApiError::Rejected {
                endpoint: endpoint.to_string(),
                status,
                message,
            }
        }
    }
}

/// The `message` field of a JSON error body, if present and non-empty.
pub(crate) fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_taken_from_json_body() {
        let err = ApiError::from_status(
            "POST /login",
            400,
            r#"{"message":"Account not activated"}"#,
            "Failed to login user",
        );
        assert_eq!(err.user_message(), "Account not activated");
        assert_eq!(err.status(), Some(400));
        assert!(matches!(err, ApiError::Rejected { .. }));
    }

    #[test]
    fn test_fallback_when_body_has_no_message() {
        for body in ["", "Internal Server Error", r#"{"error":"x"}"#, r#"{"message":"  "}"#] {
            let err = ApiError::from_status("GET /hearings/1", 500, body, "Failed to retrieve hearings");
            assert_eq!(err.user_message(), "Failed to retrieve hearings");
            assert!(matches!(err, ApiError::Server { status: 500, .. }));
        }
    }

    #[test]
    fn test_unauthorized_detection() {
        assert!(ApiError::NotAuthenticated.is_unauthorized());
        assert!(ApiError::from_status("GET /", 401, "", "x").is_unauthorized());
        assert!(!ApiError::from_status("GET /", 403, "", "x").is_unauthorized());
    }
}
