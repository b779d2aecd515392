//! Telemetry ingestion.
//!
//! A reading is validated, applied and evaluated while holding the vessel's
//! exclusive guard. Any resulting alert is published on the alert bus after
//! the guard is released; delivery happens in the background, so the
//! response never depends on notification outcome.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use jaxbrew_core::telemetry::apply_reading_in;
use jaxbrew_core::units::TemperatureUnit;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryRequest {
    /// Vessel UUID or short code.
    pub vessel_id: String,
    pub temperature: f64,
    /// `C` or `F`; any other code is treated as Celsius. Defaults to `C`.
    #[serde(default)]
    pub unit: Option<String>,
}

impl TelemetryRequest {
    fn unit(&self) -> TemperatureUnit {
        let Some(code) = self.unit.as_deref() else {
            return TemperatureUnit::Celsius;
        };
        TemperatureUnit::from_code(code).unwrap_or_else(|| {
            tracing::debug!(unit = code, "Unrecognised unit, reading taken as Celsius");
            TemperatureUnit::Celsius
        })
    }
}

#[derive(Debug, Serialize)]
pub struct TelemetryResponse {
    pub ok: bool,
}

/// POST /telemetry
pub async fn submit_telemetry(
    State(state): State<AppState>,
    Json(input): Json<TelemetryRequest>,
) -> AppResult<Json<TelemetryResponse>> {
    if input.vessel_id.trim().is_empty() {
        return Err(AppError::BadRequest("vesselId must not be empty".into()));
    }
    let unit = input.unit();

    let alert = {
        let mut vessel = state.vessels.lock_key(&input.vessel_id).await?;
        let alert = apply_reading_in(&mut vessel, input.temperature, unit, Utc::now())?;
        tracing::debug!(
            vessel = %vessel.code(),
            temperature = vessel.current_temp(),
            in_tolerance = vessel.in_tolerance(),
            "Telemetry applied"
        );
        alert
    };

    if let Some(alert) = alert {
        state.alert_bus.publish(alert);
    }

    Ok(Json(TelemetryResponse { ok: true }))
}
