//! Contract tests for the traffic police and statistics clients.

mod common;

use api::models::{AlcoholLevelCheck, DriverCheck};
use common::*;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn traffic_violations_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/traffic-violation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "tv-1", "violatorJMBG": CITIZEN_JMBG, "reason": "ALCOHOL", "description": "0.8 promil", "time": "2024-05-05T22:00:00Z", "location": "Novi Sad"}
        ])))
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server);
    let violations = client.police().traffic_violations().await.unwrap();
    assert_eq!(violations[0].reason, "ALCOHOL");
}

#[tokio::test]
async fn alcohol_check_reads_json_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/traffic-violation/check-alcohol-level"))
        .and(body_json(serde_json::json!({"alcoholLevel": 0.8, "jmbg": CITIZEN_JMBG, "location": "Novi Sad"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "Violation recorded"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server);
    let check = AlcoholLevelCheck {
        alcohol_level: 0.8,
        jmbg: CITIZEN_JMBG.into(),
        location: "Novi Sad".into(),
    };
    let outcome = client.police().check_alcohol_level(&check).await.unwrap();
    assert_eq!(outcome.message.as_deref(), Some("Violation recorded"));
}

#[tokio::test]
async fn driver_ban_check_accepts_plain_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/traffic-violation/check-driver-ban"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Driver has no active ban"))
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server);
    let check = DriverCheck {
        jmbg: CITIZEN_JMBG.into(),
        location: "Beograd".into(),
    };
    let outcome = client.police().check_driver_ban(&check).await.unwrap();
    assert_eq!(outcome.message_or("Checked"), "Driver has no active ban");
}

#[tokio::test]
async fn registered_vehicles_for_year() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/registered-vehicles/2023"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"count": 1542})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server);
    assert_eq!(client.statistics().registered_vehicles(2023).await.unwrap(), 1542);
}

#[tokio::test]
async fn most_popular_brands_ranked() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/most-popular-brands/2023"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"Fiat": 12, "Skoda": 40})))
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server);
    let brands = client.statistics().most_popular_brands(2023).await.unwrap();
    assert_eq!(brands[0].brand, "Skoda");
    assert_eq!(brands[1].count, 12);
}

#[tokio::test]
async fn violations_report_and_yearly_counts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/traffic-violations-report/2022"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ALCOHOL": 3, "SPEEDING": 9})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/vehicle-statistics-by-year"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"2021": 10, "2022": 14})))
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server);
    let report = client.statistics().traffic_violations_report(2022).await.unwrap();
    assert_eq!(report.get("SPEEDING"), Some(&9));
    let by_year = client.statistics().vehicle_statistics_by_year().await.unwrap();
    assert_eq!(by_year.len(), 2);
}

#[tokio::test]
async fn statistics_bad_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/registered-vehicles/2023"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server);
    let err = client.statistics().registered_vehicles(2023).await.unwrap_err();
    assert!(matches!(err, api::ApiError::Decode { .. }));
    assert_eq!(err.user_message(), "Failed to fetch registered vehicles");
}
