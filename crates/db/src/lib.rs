//! Vessel persistence for the JaxBrew service.
//!
//! [`VesselStore`] is the seam the HTTP layer talks to. The shipped
//! implementation, [`InMemoryVesselStore`], keeps the brewhouse layout in
//! process and hands out one exclusive guard per vessel so concurrent
//! requests against the same vessel are serialized.

pub mod layout;
pub mod store;

pub use store::{InMemoryVesselStore, VesselGuard, VesselStore};
