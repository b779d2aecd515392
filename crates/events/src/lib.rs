//! JaxBrew alert bus and notification delivery.
//!
//! - [`AlertBus`]: in-process fan-out of [`VesselAlert`]s backed by
//!   `tokio::sync::broadcast`.
//! - [`NotificationChannel`]: one outbound channel (email, messaging).
//! - [`NotificationDispatcher`]: sends one message through every configured
//!   channel with a per-channel timeout, swallowing failures.
//! - [`AlertNotifier`]: background task draining the bus into the
//!   dispatcher.
//!
//! [`VesselAlert`]: jaxbrew_core::alert::VesselAlert

pub mod bus;
pub mod channel;
pub mod delivery;
pub mod dispatcher;
pub mod notifier;

pub use bus::AlertBus;
pub use channel::{ChannelError, NotificationChannel};
pub use delivery::email::{EmailChannel, EmailConfig};
pub use delivery::messaging::{MessagingChannel, MessagingConfig};
pub use dispatcher::{DispatchSummary, NotificationDispatcher};
pub use notifier::AlertNotifier;
