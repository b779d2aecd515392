//! Route definitions for vessels, telemetry and pumps.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{pump, telemetry, vessel};
use crate::state::AppState;

/// ```text
/// GET  /vessels                 -> list_vessels
/// GET  /vessels/{id}            -> get_vessel
/// POST /vessels/{id}/setpoint   -> set_setpoint
/// POST /vessels/{id}/tolerance  -> set_tolerance
/// POST /telemetry               -> submit_telemetry
/// GET  /pumps                   -> list_pumps
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/vessels", get(vessel::list_vessels))
        .route("/vessels/{id}", get(vessel::get_vessel))
        .route("/vessels/{id}/setpoint", post(vessel::set_setpoint))
        .route("/vessels/{id}/tolerance", post(vessel::set_tolerance))
        .route("/telemetry", post(telemetry::submit_telemetry))
        .route("/pumps", get(pump::list_pumps))
}
