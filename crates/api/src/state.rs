use std::sync::Arc;

use jaxbrew_core::pump::Pump;
use jaxbrew_db::VesselStore;
use jaxbrew_events::{AlertBus, NotificationDispatcher};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Vessel state, locked per vessel.
    pub vessels: Arc<dyn VesselStore>,
    /// Fixed pump layout.
    pub pumps: Arc<Vec<Pump>>,
    /// Tolerance transitions are published here and delivered in the background.
    pub alert_bus: Arc<AlertBus>,
    /// Configured alert channels (also held by the notifier task).
    pub dispatcher: Arc<NotificationDispatcher>,
}
