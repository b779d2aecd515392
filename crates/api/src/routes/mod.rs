pub mod health;
pub mod vessel;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /vessels                         list (steps the simulation)
/// /vessels/{id}                    get (steps the simulation)
/// /vessels/{id}/setpoint           set target temperature (POST)
/// /vessels/{id}/tolerance          set tolerance band (POST)
/// /telemetry                       submit a reading (POST)
/// /pumps                           pump layout
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(vessel::router())
}
