//! Handlers for the `/vessels` resource.
//!
//! Listing endpoints advance the temperature simulation when the service
//! runs in simulated mode. Setpoint and tolerance updates do not evaluate
//! tolerance; the next telemetry reading does.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use jaxbrew_core::error::CoreError;
use jaxbrew_core::simulation;
use jaxbrew_core::telemetry::{apply_setpoint, apply_tolerance};
use jaxbrew_core::vessel::Vessel;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// A vessel with its current tolerance verdict.
#[derive(Debug, Serialize)]
pub struct VesselResponse {
    #[serde(flatten)]
    pub vessel: Vessel,
    pub in_tolerance: bool,
}

impl From<&Vessel> for VesselResponse {
    fn from(vessel: &Vessel) -> Self {
        Self {
            in_tolerance: vessel.in_tolerance(),
            vessel: vessel.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetpointRequest {
    pub target_temp: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetpointResponse {
    pub ok: bool,
    pub target_temp: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToleranceRequest {
    pub tolerance_c: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToleranceResponse {
    pub ok: bool,
    pub tolerance_c: f64,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Snapshot every vessel, stepping the simulation first when enabled.
async fn snapshot_vessels(state: &AppState) -> Vec<VesselResponse> {
    let simulate = state.config.telemetry_mode.is_simulated();
    let now = Utc::now();

    let mut vessels = Vec::new();
    for id in state.vessels.ids() {
        let Some(mut vessel) = state.vessels.lock(id).await else {
            continue;
        };
        if simulate {
            simulation::simulate(&mut vessel, now);
        }
        vessels.push(VesselResponse::from(&*vessel));
    }
    vessels
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /vessels
pub async fn list_vessels(State(state): State<AppState>) -> Json<Vec<VesselResponse>> {
    Json(snapshot_vessels(&state).await)
}

/// GET /vessels/{id}
///
/// `id` is the vessel UUID or its short code.
pub async fn get_vessel(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<VesselResponse>> {
    let not_found = || CoreError::NotFound {
        entity: "Vessel",
        key: key.clone(),
    };
    let id = state.vessels.resolve(&key).ok_or_else(not_found)?;

    snapshot_vessels(&state)
        .await
        .into_iter()
        .find(|v| v.vessel.id() == id)
        .map(Json)
        .ok_or_else(|| not_found().into())
}

/// POST /vessels/{id}/setpoint
pub async fn set_setpoint(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(input): Json<SetpointRequest>,
) -> AppResult<Json<SetpointResponse>> {
    let mut vessel = state.vessels.lock_key(&key).await?;
    apply_setpoint(&mut vessel, input.target_temp, Utc::now())?;

    tracing::info!(vessel = %vessel.code(), target_temp = input.target_temp, "Setpoint updated");
    Ok(Json(SetpointResponse {
        ok: true,
        target_temp: vessel.target_temp(),
    }))
}

/// POST /vessels/{id}/tolerance
pub async fn set_tolerance(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(input): Json<ToleranceRequest>,
) -> AppResult<Json<ToleranceResponse>> {
    let mut vessel = state.vessels.lock_key(&key).await?;
    apply_tolerance(&mut vessel, input.tolerance_c, Utc::now())?;

    tracing::info!(vessel = %vessel.code(), tolerance_c = input.tolerance_c, "Tolerance updated");
    Ok(Json(ToleranceResponse {
        ok: true,
        tolerance_c: vessel.tolerance_c(),
    }))
}
