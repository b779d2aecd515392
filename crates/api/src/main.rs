use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jaxbrew_api::config::ServerConfig;
use jaxbrew_api::router::build_app_router;
use jaxbrew_api::state::AppState;
use jaxbrew_db::{layout, InMemoryVesselStore};
use jaxbrew_events::{AlertBus, AlertNotifier, NotificationDispatcher};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jaxbrew_api=debug,jaxbrew_events=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        telemetry_mode = %config.telemetry_mode,
        "Loaded server configuration"
    );

    // --- Vessel state ---
    let vessels = layout::brewhouse_vessels(config.default_tolerance_c)
        .expect("DEFAULT_TOLERANCE_C must be within the tolerance range");
    let store = InMemoryVesselStore::new(vessels).expect("Brewhouse layout must be valid");
    tracing::info!(vessels = store.len(), "Vessel store initialised");

    // --- Alert delivery ---
    let dispatcher = Arc::new(NotificationDispatcher::from_env(Duration::from_secs(
        config.notify_timeout_secs,
    )));
    if dispatcher.is_empty() {
        tracing::warn!("No alert channels configured, transitions will only be logged");
    } else {
        tracing::info!(channels = ?dispatcher.channel_names(), "Alert channels configured");
    }

    let alert_bus = Arc::new(AlertBus::default());
    let notifier_handle =
        tokio::spawn(AlertNotifier::new(Arc::clone(&dispatcher)).run(alert_bus.subscribe()));

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        vessels: Arc::new(store),
        pumps: Arc::new(layout::brewhouse_pumps()),
        alert_bus: Arc::clone(&alert_bus),
        dispatcher,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    // Dropping the last bus handle closes the channel and lets the
    // notifier drain queued alerts before exiting.
    drop(alert_bus);
    let _ = tokio::time::timeout(
        Duration::from_secs(config.notify_timeout_secs + 1),
        notifier_handle,
    )
    .await;

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
