//! Contract tests for the court client.
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | GET | `/api/v1/hearings/{jmbg}` | `hearings_*`, `not_logged_in_*` |
//! | GET | `/api/v1/suspensions/{jmbg}` | `suspension_*` |
//! | GET | `/api/v1/warrants/{jmbg}` | `warrants_*` |
//! | POST | `/api/v1/create-hearing-{person,entity}` | `create_hearing_*` |
//! | PUT | `/api/v1/update-hearing-{person,entity}` | `reschedule_*` |

mod common;

use api::models::{CourtHearing, NewHearing};
use api::ApiError;
use common::*;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn hearing_path() -> String {
    format!("/api/v1/hearings/{CITIZEN_JMBG}")
}

#[tokio::test]
async fn hearings_for_token_subject() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(hearing_path()))
        .and(header("Authorization", format!("Bearer {}", citizen_token()).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "h-1",
                "reason": "Speeding",
                "dateTime": "2024-06-07T10:30:00Z",
                "court": "Osnovni sud Novi Sad",
                "person": CITIZEN_JMBG
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server);
    let hearings = client.court().hearings().await.unwrap();
    assert_eq!(hearings.len(), 1);
    assert_eq!(hearings[0].date_time, "2024-06-07T10:30:00Z");
    assert!(!hearings[0].is_legal_entity());
}

#[tokio::test]
async fn hearings_empty_list_and_null_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(hearing_path()))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server);
    assert!(client.court().hearings().await.unwrap().is_empty());
}

#[tokio::test]
async fn hearings_failure_uses_fallback_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(hearing_path()))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server);
    let err = client.court().hearings().await.unwrap_err();
    assert_eq!(err.user_message(), "Failed to retrieve hearings");
}

#[tokio::test]
async fn not_logged_in_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let (client, _session) = anonymous_client(&server);
    let err = client.court().hearings().await.unwrap_err();
    assert!(matches!(err, ApiError::NotAuthenticated));
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn suspension_missing_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/suspensions/{CITIZEN_JMBG}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({"message": "not found"})))
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server);
    assert_eq!(client.court().suspension().await.unwrap(), None);
}

#[tokio::test]
async fn suspension_present() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/suspensions/{CITIZEN_JMBG}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "s-1",
            "from": "2024-01-01T00:00:00Z",
            "to": "2024-07-01T00:00:00Z",
            "person": CITIZEN_JMBG
        })))
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server);
    let suspension = client.court().suspension().await.unwrap().unwrap();
    assert_eq!(suspension.to, "2024-07-01T00:00:00Z");
}

#[tokio::test]
async fn warrants_decode() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/warrants/{CITIZEN_JMBG}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "w-1", "trafficViolation": "tv-9", "issuedOn": "2024-02-02T00:00:00Z", "issuedFor": CITIZEN_JMBG}
        ])))
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server);
    let warrants = client.court().warrants().await.unwrap();
    assert_eq!(warrants[0].traffic_violation, "tv-9");
}

#[tokio::test]
async fn create_hearing_routes_by_party() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/create-hearing-entity"))
        .and(body_json(serde_json::json!({
            "reason": "Unpaid fines",
            "dateTime": "2024-09-01T09:00:00Z",
            "court": "Privredni sud",
            "legalEntity": "123456789"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/create-hearing-person"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server);
    let hearing = NewHearing {
        reason: "Unpaid fines".into(),
        date_time: "2024-09-01T09:00:00Z".into(),
        court: "Privredni sud".into(),
        person: None,
        legal_entity: Some("123456789".into()),
    };
    client.court().create_hearing(&hearing).await.unwrap();
}

#[tokio::test]
async fn reschedule_person_hearing() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/update-hearing-person"))
        .and(body_json(serde_json::json!({"hearingID": "h-1", "dateTime": "2024-10-10T10:00:00Z"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "updated"})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server);
    let hearing = CourtHearing {
        id: "h-1".into(),
        reason: "Speeding".into(),
        date_time: "2024-06-07T10:30:00Z".into(),
        court: "Osnovni sud".into(),
        person: Some(CITIZEN_JMBG.into()),
        legal_entity: None,
    };
    client
        .court()
        .reschedule_hearing(&hearing, "2024-10-10T10:00:00Z")
        .await
        .unwrap();
}

#[tokio::test]
async fn reschedule_rejected_keeps_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/update-hearing-entity"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(serde_json::json!({"message": "Date is in the past"})),
        )
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server);
    let hearing = CourtHearing {
        id: "h-2".into(),
        reason: "Tax".into(),
        date_time: "2024-06-07T10:30:00Z".into(),
        court: "Privredni sud".into(),
        person: None,
        legal_entity: Some("123456789".into()),
    };
    let err = client
        .court()
        .reschedule_hearing(&hearing, "2001-01-01T00:00:00Z")
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Date is in the past");
}
