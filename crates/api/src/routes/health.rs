use axum::extract::State;
use axum::{routing::get, Json, Router};
use jaxbrew_core::simulation::TelemetryMode;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub telemetry_mode: TelemetryMode,
    pub vessel_count: usize,
    /// Names of the configured alert channels.
    pub alert_channels: Vec<&'static str>,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        telemetry_mode: state.config.telemetry_mode,
        vessel_count: state.vessels.ids().len(),
        alert_channels: state.dispatcher.channel_names(),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
