//! Background delivery of vessel alerts.
//!
//! [`AlertNotifier`] subscribes to the [`AlertBus`](crate::AlertBus) and
//! hands each alert to the [`NotificationDispatcher`]. Running delivery here
//! keeps slow SMTP or messaging providers off the request path.

use std::sync::Arc;

use jaxbrew_core::alert::VesselAlert;
use tokio::sync::broadcast;

use crate::dispatcher::NotificationDispatcher;

pub struct AlertNotifier {
    dispatcher: Arc<NotificationDispatcher>,
}

impl AlertNotifier {
    pub fn new(dispatcher: Arc<NotificationDispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Run the delivery loop.
    ///
    /// Exits when the channel is closed (i.e. the
    /// [`AlertBus`](crate::AlertBus) is dropped).
    pub async fn run(self, mut receiver: broadcast::Receiver<VesselAlert>) {
        loop {
            match receiver.recv().await {
                Ok(alert) => self.deliver(&alert).await,
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Alert notifier lagged, alerts dropped");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Alert bus closed, notifier shutting down");
                    break;
                }
            }
        }
    }

    async fn deliver(&self, alert: &VesselAlert) {
        if self.dispatcher.is_empty() {
            tracing::debug!(vessel = %alert.vessel_code, "No alert channels configured");
            return;
        }
        let summary = self.dispatcher.dispatch(&alert.subject(), &alert.body()).await;
        tracing::debug!(
            vessel = %alert.vessel_code,
            delivered = summary.delivered,
            failed = summary.failed,
            "Alert dispatched"
        );
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use jaxbrew_core::alert::AlertKind;

    use super::*;
    use crate::bus::tests::sample_alert;
    use crate::bus::AlertBus;
    use crate::dispatcher::tests::RecordingChannel;

    #[tokio::test]
    async fn delivers_published_alerts_and_stops_when_bus_closes() {
        let recorder = Arc::new(RecordingChannel::default());
        let dispatcher = Arc::new(NotificationDispatcher::default().with_channel(recorder.clone()));

        let bus = AlertBus::default();
        let handle = tokio::spawn(AlertNotifier::new(dispatcher).run(bus.subscribe()));

        bus.publish(sample_alert(AlertKind::OutOfTolerance));
        bus.publish(sample_alert(AlertKind::BackWithinTolerance));
        drop(bus);

        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("notifier should exit once the bus is dropped")
            .unwrap();

        let sent = recorder.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].0, "[JaxBrew] Fermenter 1 OUT OF TOLERANCE");
        assert_eq!(sent[0].1, "Fermenter 1: current 22.3°C, target 19.0°C ± 2.0°C");
        assert_eq!(sent[1].0, "[JaxBrew] Fermenter 1 BACK WITHIN TOLERANCE");
    }
}
