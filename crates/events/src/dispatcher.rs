//! Fan-out of one message to every configured notification channel.
//!
//! Channels run concurrently. Each send is bounded by the dispatcher's
//! timeout, and a failing or slow channel never affects the others or the
//! caller: [`NotificationDispatcher::dispatch`] cannot fail.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;

use crate::channel::{ChannelError, NotificationChannel};
use crate::delivery::email::{EmailChannel, EmailConfig};
use crate::delivery::messaging::{MessagingChannel, MessagingConfig};

/// Default upper bound on a single channel send.
pub const DEFAULT_CHANNEL_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome counts of one [`NotificationDispatcher::dispatch`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub delivered: usize,
    pub failed: usize,
}

pub struct NotificationDispatcher {
    channels: Vec<Arc<dyn NotificationChannel>>,
    timeout: Duration,
}

impl NotificationDispatcher {
    /// Create a dispatcher with no channels.
    pub fn new(timeout: Duration) -> Self {
        Self {
            channels: Vec::new(),
            timeout,
        }
    }

    /// Create a dispatcher with every channel configured in the environment.
    ///
    /// Unconfigured channels are skipped. A configured channel that cannot
    /// be constructed is logged and skipped.
    pub fn from_env(timeout: Duration) -> Self {
        let mut dispatcher = Self::new(timeout);

        match EmailConfig::from_env() {
            Some(config) => {
                tracing::info!(to = %config.to_address, "Email alert channel enabled");
                dispatcher = dispatcher.with_channel(Arc::new(EmailChannel::new(config)));
            }
            None => tracing::debug!("Email alert channel not configured, skipping"),
        }

        match MessagingConfig::from_env() {
            Some(config) => match MessagingChannel::new(config) {
                Ok(channel) => {
                    tracing::info!("Messaging alert channel enabled");
                    dispatcher = dispatcher.with_channel(Arc::new(channel));
                }
                Err(e) => tracing::warn!(error = %e, "Messaging alert channel unavailable"),
            },
            None => tracing::debug!("Messaging alert channel not configured, skipping"),
        }

        dispatcher
    }

    /// Add a channel.
    pub fn with_channel(mut self, channel: Arc<dyn NotificationChannel>) -> Self {
        self.channels.push(channel);
        self
    }

    pub fn channel_names(&self) -> Vec<&'static str> {
        self.channels.iter().map(|c| c.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Send `subject`/`body` through every channel.
    ///
    /// Failures are logged and counted, never returned.
    pub async fn dispatch(&self, subject: &str, body: &str) -> DispatchSummary {
        let sends = self.channels.iter().map(|channel| async move {
            let result = match tokio::time::timeout(self.timeout, channel.send(subject, body)).await
            {
                Ok(result) => result,
                Err(_) => Err(ChannelError::TimedOut(self.timeout)),
            };
            (channel.name(), result)
        });

        let mut summary = DispatchSummary::default();
        for (name, result) in join_all(sends).await {
            match result {
                Ok(()) => summary.delivered += 1,
                Err(e) => {
                    summary.failed += 1;
                    tracing::warn!(channel = name, error = %e, subject, "Alert delivery failed");
                }
            }
        }
        summary
    }
}

impl Default for NotificationDispatcher {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_TIMEOUT)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
