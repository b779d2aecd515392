//! External delivery channels for vessel alerts.
//!
//! Each channel has a config type whose `from_env` returns `None` when the
//! channel is not configured; unconfigured channels are simply never
//! constructed.

pub mod email;
pub mod messaging;
