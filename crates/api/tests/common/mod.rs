#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use jaxbrew_core::alert::VesselAlert;
use jaxbrew_core::simulation::TelemetryMode;
use jaxbrew_db::{layout, InMemoryVesselStore};
use jaxbrew_events::{AlertBus, ChannelError, NotificationChannel, NotificationDispatcher};
use tokio::sync::broadcast;
use tower::ServiceExt;

use jaxbrew_api::config::ServerConfig;
use jaxbrew_api::router::build_app_router;
use jaxbrew_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Live mode keeps vessel temperatures deterministic; tests that exercise
/// the simulator switch it on explicitly.
pub fn test_config(telemetry_mode: TelemetryMode) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        telemetry_mode,
        default_tolerance_c: 2.0,
        notify_timeout_secs: 1,
    }
}

/// A fully wired application plus handles for inspecting side effects.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    /// Receives every alert published by the telemetry handler.
    pub alerts: broadcast::Receiver<VesselAlert>,
}

pub fn build_test_app(telemetry_mode: TelemetryMode) -> TestApp {
    build_test_app_with(telemetry_mode, NotificationDispatcher::default())
}

/// Build the full application router with the brewhouse layout and the
/// given dispatcher.
pub fn build_test_app_with(
    telemetry_mode: TelemetryMode,
    dispatcher: NotificationDispatcher,
) -> TestApp {
    let config = test_config(telemetry_mode);
    let vessels = layout::brewhouse_vessels(config.default_tolerance_c).unwrap();
    let store = InMemoryVesselStore::new(vessels).unwrap();

    let alert_bus = Arc::new(AlertBus::default());
    let alerts = alert_bus.subscribe();

    let state = AppState {
        config: Arc::new(config.clone()),
        vessels: Arc::new(store),
        pumps: Arc::new(layout::brewhouse_pumps()),
        alert_bus,
        dispatcher: Arc::new(dispatcher),
    };

    TestApp {
        router: build_app_router(state.clone(), &config),
        state,
        alerts,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Fetch a single vessel by id or code and return its JSON.
pub async fn vessel_json(app: &TestApp, key: &str) -> serde_json::Value {
    let response = get(app.router.clone(), &format!("/api/vessels/{key}")).await;
    body_json(response).await
}

/// Submit a Celsius reading and return the response.
pub async fn submit(app: &TestApp, key: &str, temperature: f64) -> Response {
    post_json(
        app.router.clone(),
        "/api/telemetry",
        serde_json::json!({ "vesselId": key, "temperature": temperature }),
    )
    .await
}

/// Assert no alert was published since the last check.
pub fn assert_no_alert(app: &mut TestApp) {
    assert!(
        matches!(
            app.alerts.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ),
        "expected no alert to be published"
    );
}

// ---------------------------------------------------------------------------
// Recording channel
// ---------------------------------------------------------------------------

/// Channel that records every message it is asked to send.
#[derive(Default)]
pub struct RecordingChannel {
    pub sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl NotificationChannel for RecordingChannel {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, subject: &str, body: &str) -> Result<(), ChannelError> {
        self.sent
            .lock()
            .unwrap()
            .push((subject.to_string(), body.to_string()));
        Ok(())
    }
}

/// Dispatcher with a single recording channel and a short timeout.
pub fn recording_dispatcher() -> (NotificationDispatcher, Arc<RecordingChannel>) {
    let recorder = Arc::new(RecordingChannel::default());
    let dispatcher =
        NotificationDispatcher::new(Duration::from_secs(1)).with_channel(recorder.clone());
    (dispatcher, recorder)
}
