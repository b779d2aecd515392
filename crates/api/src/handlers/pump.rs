use axum::extract::State;
use axum::Json;
use jaxbrew_core::pump::Pump;

use crate::state::AppState;

/// GET /pumps
pub async fn list_pumps(State(state): State<AppState>) -> Json<Vec<Pump>> {
    Json(state.pumps.as_ref().clone())
}
