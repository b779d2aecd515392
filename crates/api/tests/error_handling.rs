//! Tests for the mapping of application errors to HTTP responses.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use jaxbrew_api::error::AppError;
use jaxbrew_core::error::CoreError;

async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn not_found_maps_to_404() {
    let (status, json) = render(AppError::Core(CoreError::NotFound {
        entity: "Vessel",
        key: "hlt-2".into(),
    }))
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Vessel 'hlt-2' not found");
}

#[tokio::test]
async fn out_of_range_maps_to_400_with_bounds() {
    let (status, json) = render(AppError::Core(CoreError::OutOfRange {
        field: "temperature",
        value: 150.0,
        min: -10.0,
        max: 120.0,
    }))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "OUT_OF_RANGE");
    let message = json["error"].as_str().unwrap();
    assert!(message.starts_with("temperature out of range"), "{message}");
    assert!(message.contains("150"), "{message}");
}

#[tokio::test]
async fn validation_maps_to_400() {
    let (status, json) =
        render(AppError::Core(CoreError::Validation("temperature must be finite".into()))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "temperature must be finite");
}

#[tokio::test]
async fn bad_request_maps_to_400() {
    let (status, json) = render(AppError::BadRequest("vesselId must not be empty".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
}
