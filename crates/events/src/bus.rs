//! In-process alert bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`AlertBus`] decouples the telemetry path from notification delivery:
//! request handlers publish and return immediately, while the
//! [`AlertNotifier`](crate::AlertNotifier) task delivers in the background.
//! It is designed to be shared via `Arc<AlertBus>`.

use jaxbrew_core::alert::VesselAlert;
use tokio::sync::broadcast;

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 256;

/// In-process fan-out bus for [`VesselAlert`]s.
///
/// # Usage
///
/// ```rust
/// use jaxbrew_events::AlertBus;
///
/// let bus = AlertBus::default();
/// let mut rx = bus.subscribe();
/// assert!(rx.try_recv().is_err());
/// ```
pub struct AlertBus {
    sender: broadcast::Sender<VesselAlert>,
}

impl AlertBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed alerts are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an alert to all current subscribers.
    ///
    /// If there are no active subscribers the alert is dropped.
    pub fn publish(&self, alert: VesselAlert) {
        tracing::info!(
            vessel = %alert.vessel_code,
            kind = ?alert.kind,
            current_temp = alert.current_temp,
            target_temp = alert.target_temp,
            tolerance_c = alert.tolerance_c,
            "Tolerance transition"
        );
        // A SendError only means there are zero receivers.
        let _ = self.sender.send(alert);
    }

    /// Subscribe to all alerts published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<VesselAlert> {
        self.sender.subscribe()
    }
}

impl Default for AlertBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
