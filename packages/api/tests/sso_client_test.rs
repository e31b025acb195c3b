//! Contract tests for the SSO client: login, logout, registration and
//! password recovery.
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | POST | `/api/v1/login` | `login_*`, `token_read_at_call_time` |
//! | GET | `/api/v1/logout` | `logout_*` |
//! | POST | `/api/v1/register-person` | `register_person_*` |
//! | POST | `/api/v1/register-entity` | `register_legal_entity_*` |
//! | POST | `/api/v1/recover-password` | `recover_password_*` |
//! | POST | `/api/v1/reset-password` | `reset_password_*` |

mod common;

use api::models::{Credentials, NewLegalEntity, PasswordReset};
use api::{ApiError, Role, Service};
use common::*;
use store::{MemoryStore, SessionStore};
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credentials() -> Credentials {
    Credentials {
        email: "marko@example.rs".into(),
        password: "Secret1".into(),
    }
}

#[tokio::test]
async fn login_stores_token_and_returns_identity() {
    let server = MockServer::start().await;
    let token = citizen_token();

    Mock::given(method("POST"))
        .and(path("/api/v1/login"))
        .and(body_json(serde_json::json!({"email": "marko@example.rs", "password": "Secret1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": token})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, session) = anonymous_client(&server);
    let identity = client.sso().login(&credentials()).await.unwrap();

    assert_eq!(identity.subject, CITIZEN_JMBG);
    assert_eq!(identity.role, Some(Role::User));
    assert_eq!(session.get_token().as_deref(), Some(token.as_str()));
}

#[tokio::test]
async fn token_read_at_call_time() {
    let server = MockServer::start().await;
    let token = citizen_token();

    Mock::given(method("POST"))
        .and(path("/api/v1/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": token})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/hearings/{CITIZEN_JMBG}")))
        .and(header("Authorization", format!("Bearer {token}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    // Client built while logged out must still send the token login stores.
    let (client, _session) = anonymous_client(&server);
    client.sso().login(&credentials()).await.unwrap();
    let hearings = client.court().hearings().await.unwrap();
    assert!(hearings.is_empty());
}

#[tokio::test]
async fn login_failure_carries_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({"message": "Account is not activated"})),
        )
        .mount(&server)
        .await;

    let (client, session) = anonymous_client(&server);
    let err = client.sso().login(&credentials()).await.unwrap_err();

    assert_eq!(err.user_message(), "Account is not activated");
    assert_eq!(err.status(), Some(401));
    assert!(!session.has_token());
}

#[tokio::test]
async fn login_failure_without_message_uses_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/login"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let (client, _session) = anonymous_client(&server);
    let err = client.sso().login(&credentials()).await.unwrap_err();

    assert!(matches!(err, ApiError::Server { status: 500, .. }));
    assert_eq!(err.user_message(), "Failed to login user");
}

#[tokio::test]
async fn login_with_empty_token_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": ""})))
        .mount(&server)
        .await;

    let (client, session) = anonymous_client(&server);
    assert!(client.sso().login(&credentials()).await.is_err());
    assert!(!session.has_token());
}

#[tokio::test]
async fn logout_clears_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/logout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let (client, session) = logged_in_client(&server);
    client.sso().logout().await;
    assert!(!session.has_token());
}

#[tokio::test]
async fn logout_clears_token_even_when_service_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/logout"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (client, session) = logged_in_client(&server);
    client.sso().logout().await;
    assert!(!session.has_token());
    assert!(client.identity().is_empty());
}

#[tokio::test]
async fn register_legal_entity_sends_camel_case_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/register-entity"))
        .and(body_partial_json(serde_json::json!({
            "name": "Autoprevoz",
            "pib": "123456789",
            "mb": "12345678",
            "role": "USER",
            "streetName": "Bulevar",
            "streetNumber": 12,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": "e-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = anonymous_client(&server);
    let entity = NewLegalEntity {
        email: "office@autoprevoz.rs".into(),
        password: "Secret1".into(),
        name: "Autoprevoz".into(),
        citizenship: "Serbian".into(),
        pib: "123456789".into(),
        mb: "12345678".into(),
        role: Role::User,
        municipality: "Novi Sad".into(),
        locality: "Liman".into(),
        street_name: "Bulevar".into(),
        street_number: 12,
    };
    client.sso().register_legal_entity(&entity).await.unwrap();
}

#[tokio::test]
async fn register_person_conflict_surfaces_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/register-person"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(serde_json::json!({"message": "Email already in use"})),
        )
        .mount(&server)
        .await;

    let (client, _session) = anonymous_client(&server);
    let input = api::validation::PersonInput {
        account: api::validation::AccountInput {
            email: "marko@example.rs".into(),
            password: "Secret1".into(),
            password_repeat: "Secret1".into(),
            citizenship: "Serbian".into(),
            municipality: "Novi Sad".into(),
            locality: "Liman".into(),
            street_name: "Bulevar".into(),
            street_number: "3".into(),
        },
        first_name: "Marko".into(),
        last_name: "Markovic".into(),
        sex: "MALE".into(),
        dob: "1990-01-01".into(),
        jmbg: CITIZEN_JMBG.into(),
    };
    let person = api::validation::validate_person(&input, chrono::Utc::now().date_naive()).unwrap();
    let err = client.sso().register_person(&person).await.unwrap_err();
    assert_eq!(err.user_message(), "Email already in use");
}

#[tokio::test]
async fn recover_password_posts_email() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/recover-password"))
        .and(body_json(serde_json::json!({"email": "marko@example.rs"})))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = anonymous_client(&server);
    client.sso().recover_password("marko@example.rs").await.unwrap();
}

#[tokio::test]
async fn reset_password_posts_code_and_password() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/reset-password"))
        .and(body_json(serde_json::json!({"passwordResetCode": "R3S3T", "newPassword": "Secret1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with(&server, MemoryStore::new());
    let reset = PasswordReset {
        password_reset_code: "R3S3T".into(),
        new_password: "Secret1".into(),
    };
    client.sso().reset_password(&reset).await.unwrap();
}

#[tokio::test]
async fn ping_returns_reply_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Pong"))
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server);
    assert_eq!(client.ping(Service::Mup).await.unwrap(), "Pong");
    assert_eq!(client.ping(Service::Statistics).await.unwrap(), "Pong");

    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.headers.contains_key("authorization")));
}

#[tokio::test]
async fn sso_is_not_pinged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Pong"))
        .expect(0)
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server);
    let err = client.ping(Service::Sso).await.unwrap_err();
    assert!(matches!(err, ApiError::NotPingable("SSO")));
}
