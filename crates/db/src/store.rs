//! Vessel store abstraction and its in-memory implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use jaxbrew_core::error::CoreError;
use jaxbrew_core::types::EntityId;
use jaxbrew_core::vessel::Vessel;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Exclusive access to one vessel. Released on drop.
pub type VesselGuard = OwnedMutexGuard<Vessel>;

/// Read/write access to vessel state.
///
/// Every mutation goes through a [`VesselGuard`]; holding it is the only way
/// to read-modify-write a vessel, so a telemetry update and its tolerance
/// evaluation never interleave with another request on the same vessel.
#[async_trait]
pub trait VesselStore: Send + Sync {
    /// Ids of all vessels, in layout order.
    fn ids(&self) -> Vec<EntityId>;

    /// Resolve a vessel key (UUID or short code) to its id.
    fn resolve(&self, key: &str) -> Option<EntityId>;

    /// Acquire exclusive access to one vessel.
    async fn lock(&self, id: EntityId) -> Option<VesselGuard>;

    /// Resolve `key` and lock the vessel, failing with `NotFound`.
    async fn lock_key(&self, key: &str) -> Result<VesselGuard, CoreError> {
        let not_found = || CoreError::NotFound {
            entity: "Vessel",
            key: key.to_string(),
        };
        let id = self.resolve(key).ok_or_else(not_found)?;
        self.lock(id).await.ok_or_else(not_found)
    }
}

// ---------------------------------------------------------------------------
// InMemoryVesselStore
// ---------------------------------------------------------------------------

/// Vessel store backed by one async mutex per vessel.
///
/// The set of vessels is fixed at construction; there is no insert or
/// delete path.
#[derive(Debug)]
pub struct InMemoryVesselStore {
    order: Vec<EntityId>,
    vessels: HashMap<EntityId, Arc<Mutex<Vessel>>>,
    codes: HashMap<String, EntityId>,
}

impl InMemoryVesselStore {
    /// Build a store from a layout, rejecting duplicate ids or codes.
    pub fn new(layout: Vec<Vessel>) -> Result<Self, CoreError> {
        let mut order = Vec::with_capacity(layout.len());
        let mut vessels = HashMap::with_capacity(layout.len());
        let mut codes = HashMap::with_capacity(layout.len());

        for vessel in layout {
            let id = vessel.id();
            if codes.insert(vessel.code().to_string(), id).is_some() {
                return Err(CoreError::Validation(format!(
                    "duplicate vessel code '{}'",
                    vessel.code()
                )));
            }
            if vessels.insert(id, Arc::new(Mutex::new(vessel))).is_some() {
                return Err(CoreError::Validation(format!("duplicate vessel id {id}")));
            }
            order.push(id);
        }

        tracing::debug!(count = order.len(), "Vessel store initialised");
        Ok(Self {
            order,
            vessels,
            codes,
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[async_trait]
impl VesselStore for InMemoryVesselStore {
    fn ids(&self) -> Vec<EntityId> {
        self.order.clone()
    }

    fn resolve(&self, key: &str) -> Option<EntityId> {
        if let Ok(id) = key.parse::<EntityId>() {
            if self.vessels.contains_key(&id) {
                return Some(id);
            }
        }
        self.codes.get(key).copied()
    }

    async fn lock(&self, id: EntityId) -> Option<VesselGuard> {
        let cell = self.vessels.get(&id)?;
        Some(Arc::clone(cell).lock_owned().await)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
