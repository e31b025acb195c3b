#![allow(dead_code)]

use std::sync::Arc;

use api::ApiClient;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use store::{MemoryStore, PortalConfig, SessionStore};
use wiremock::MockServer;

pub const CITIZEN_JMBG: &str = "0101990710006";

/// Unsigned token carrying `claims`, shaped like the SSO service's.
pub fn make_token(claims: serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}

pub fn citizen_token() -> String {
    make_token(serde_json::json!({
        "sub": CITIZEN_JMBG,
        "name": "Marko Markovic",
        "role": "USER",
        "exp": 4_102_444_800i64,
    }))
}

pub fn admin_token() -> String {
    make_token(serde_json::json!({
        "sub": "0202985710011",
        "name": "Ana Admin",
        "role": "ADMIN",
        "exp": 4_102_444_800i64,
    }))
}

/// Every service behind one mock server, under `/api/v1`.
pub fn config_for(server: &MockServer) -> PortalConfig {
    PortalConfig::single_origin(&format!("{}/api/v1", server.uri()))
}

pub fn client_with(server: &MockServer, session: MemoryStore) -> ApiClient {
    ApiClient::new(config_for(server), Arc::new(session)).unwrap()
}

pub fn logged_in_client(server: &MockServer) -> (ApiClient, MemoryStore) {
    let session = MemoryStore::with_token(citizen_token());
    (client_with(server, session.clone()), session)
}

pub fn anonymous_client(server: &MockServer) -> (ApiClient, MemoryStore) {
    let session = MemoryStore::new();
    assert!(!session.has_token());
    (client_with(server, session.clone()), session)
}
