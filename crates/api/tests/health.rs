//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, build_test_app_with, get, recording_dispatcher};
use jaxbrew_core::simulation::TelemetryMode;

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = build_test_app(TelemetryMode::Live);
    let response = get(app.router.clone(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["telemetry_mode"], "live");
    assert_eq!(json["vessel_count"], 6);
    assert_eq!(json["alert_channels"], serde_json::json!([]));
}

#[tokio::test]
async fn health_lists_configured_channels() {
    let (dispatcher, _) = recording_dispatcher();
    let app = build_test_app_with(TelemetryMode::Simulated, dispatcher);
    let json = body_json(get(app.router.clone(), "/health").await).await;
    assert_eq!(json["telemetry_mode"], "simulated");
    assert_eq!(json["alert_channels"], serde_json::json!(["recording"]));
}

#[tokio::test]
async fn health_is_not_nested_under_api() {
    let app = build_test_app(TelemetryMode::Live);
    let response = get(app.router.clone(), "/api/health").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = build_test_app(TelemetryMode::Live);
    let response = get(app.router.clone(), "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}
