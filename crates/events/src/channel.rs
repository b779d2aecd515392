//! The notification channel seam.

use std::time::Duration;

use async_trait::async_trait;

use crate::delivery::email::EmailError;
use crate::delivery::messaging::MessagingError;

/// Error raised by a channel at send time.
///
/// Never surfaced to API callers; the dispatcher logs it and moves on.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error(transparent)]
    Email(#[from] EmailError),

    #[error(transparent)]
    Messaging(#[from] MessagingError),

    #[error("Channel timed out after {0:?}")]
    TimedOut(Duration),

    /// Free-form failure for channels outside this crate.
    #[error("Channel failed: {0}")]
    Other(String),
}

/// One outbound notification channel.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Short channel name used in logs, e.g. `"email"`.
    fn name(&self) -> &'static str;

    /// Deliver one message.
    async fn send(&self, subject: &str, body: &str) -> Result<(), ChannelError>;
}
