//! JaxBrew brewhouse domain logic.
//!
//! Everything in this crate is pure (no I/O). The store, notification
//! channels and HTTP surface live in the sibling crates and call into the
//! functions here.

pub mod alert;
pub mod error;
pub mod pump;
pub mod simulation;
pub mod telemetry;
pub mod tolerance;
pub mod types;
pub mod units;
pub mod validation;
pub mod vessel;
