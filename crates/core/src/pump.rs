//! Transfer pumps. Read-only layout data; pumps carry no telemetry.

use serde::Serialize;

use crate::types::EntityId;

#[derive(Debug, Clone, Serialize)]
pub struct Pump {
    pub id: EntityId,
    pub code: String,
    pub name: String,
    /// What the pump moves, e.g. `"HLT → Mash"`.
    pub role: String,
}

impl Pump {
    pub fn new(code: impl Into<String>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: EntityId::new_v4(),
            code: code.into(),
            name: name.into(),
            role: role.into(),
        }
    }
}
