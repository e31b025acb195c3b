#![allow(dead_code)]

use std::sync::Arc;

use api::ApiClient;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use store::{MemoryStore, PortalConfig};
use ui::forms::{FormField, FormValues};
use ui::toast::ToastLevel;
use ui::workflow::{ActionState, WorkflowHost};
use wiremock::MockServer;

pub const CITIZEN_JMBG: &str = "0101990710006";

pub const ADMIN_EMAIL: &str = "admin@mup.rs";

fn token(subject: &str, role: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let claims = serde_json::json!({
        "sub": subject,
        "role": role,
        "exp": 4_102_444_800i64,
    });
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}

pub fn citizen_token() -> String {
    token(CITIZEN_JMBG, "USER")
}

pub fn admin_token() -> String {
    token(ADMIN_EMAIL, "ADMIN")
}

pub fn client_for(server: &MockServer, session: MemoryStore) -> ApiClient {
    let config = PortalConfig::single_origin(&format!("{}/api/v1", server.uri()));
    ApiClient::new(config, Arc::new(session)).unwrap()
}

/// Submitted values for a form of plain text fields.
pub fn submitted(pairs: &[(&str, &str)]) -> FormValues {
    let fields: Vec<_> = pairs.iter().map(|(name, _)| FormField::text(name, name)).collect();
    let mut values = FormValues::from_fields(&fields).unwrap();
    for (name, value) in pairs {
        values.set_text(name, *value).unwrap();
    }
    values
}

/// A page stand-in that counts what a mutation asked of it.
#[derive(Default)]
pub struct CountingPage {
    pub state: ActionState,
    pub toasts: Vec<(ToastLevel, String)>,
    pub modal_open: bool,
    pub fetches: usize,
}

impl WorkflowHost for CountingPage {
    fn state(&self) -> ActionState {
        self.state.clone()
    }

    fn set_state(&mut self, state: ActionState) {
        self.state = state;
    }

    fn notify(&mut self, level: ToastLevel, message: &str) {
        self.toasts.push((level, message.to_string()));
    }

    fn close_modal(&mut self) {
        self.modal_open = false;
    }

    fn refresh(&mut self) {
        self.fetches += 1;
    }
}
