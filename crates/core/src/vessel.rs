//! Brewhouse vessel model.
//!
//! A [`Vessel`] is built once from a [`NewVessel`] with every field
//! initialised. Identity (`id`, `code`) is private and has no setter; the
//! temperature fields are mutated only through [`crate::telemetry`] and
//! [`crate::simulation`], and the tolerance state only through
//! [`crate::alert::evaluate`].

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::tolerance::in_tolerance;
use crate::types::{EntityId, Timestamp};
use crate::validation::{validate_setpoint, validate_tolerance};

// ---------------------------------------------------------------------------
// VesselKind
// ---------------------------------------------------------------------------

/// Category of a vessel. Governs the clamping range used by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VesselKind {
    /// Heated-liquor tank.
    #[serde(rename = "HLT")]
    HotLiquorTank,
    #[serde(rename = "Mash tun")]
    MashTun,
    #[serde(rename = "Kettle")]
    Kettle,
    #[serde(rename = "Fermenter")]
    Fermenter,
}

// ---------------------------------------------------------------------------
// ToleranceState
// ---------------------------------------------------------------------------

/// Last tolerance verdict recorded by the alert state machine.
///
/// Serialized as `null` / `true` / `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum ToleranceState {
    /// No evaluation has happened yet.
    #[default]
    Unknown,
    InTolerance,
    OutOfTolerance,
}

impl From<bool> for ToleranceState {
    fn from(in_tol: bool) -> Self {
        if in_tol {
            Self::InTolerance
        } else {
            Self::OutOfTolerance
        }
    }
}

impl From<Option<bool>> for ToleranceState {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Unknown, Self::from)
    }
}

impl From<ToleranceState> for Option<bool> {
    fn from(state: ToleranceState) -> Self {
        match state {
            ToleranceState::Unknown => None,
            ToleranceState::InTolerance => Some(true),
            ToleranceState::OutOfTolerance => Some(false),
        }
    }
}

// ---------------------------------------------------------------------------
// Vessel
// ---------------------------------------------------------------------------

/// Input for constructing a [`Vessel`].
#[derive(Debug, Clone)]
pub struct NewVessel {
    pub code: String,
    pub name: String,
    pub kind: VesselKind,
    pub volume_l: u32,
    pub heated: bool,
    pub notes: String,
    pub current_temp: f64,
    pub target_temp: f64,
    pub tolerance_c: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Vessel {
    id: EntityId,
    code: String,
    pub name: String,
    #[serde(rename = "type")]
    kind: VesselKind,
    pub volume_l: u32,
    pub heated: bool,
    pub notes: String,
    current_temp: f64,
    target_temp: f64,
    tolerance_c: f64,
    last_update: Timestamp,
    last_in_tolerance: ToleranceState,
}

impl Vessel {
    /// Build a vessel with a fresh id and an `Unknown` tolerance state.
    pub fn new(input: NewVessel) -> Result<Self, CoreError> {
        if input.code.trim().is_empty() {
            return Err(CoreError::Validation("vessel code must not be empty".into()));
        }
        if !input.current_temp.is_finite() {
            return Err(CoreError::Validation("current_temp must be a finite number".into()));
        }
        validate_setpoint(input.target_temp)?;
        validate_tolerance(input.tolerance_c)?;

        Ok(Self {
            id: EntityId::new_v4(),
            code: input.code,
            name: input.name,
            kind: input.kind,
            volume_l: input.volume_l,
            heated: input.heated,
            notes: input.notes,
            current_temp: input.current_temp,
            target_temp: input.target_temp,
            tolerance_c: input.tolerance_c,
            last_update: Utc::now(),
            last_in_tolerance: ToleranceState::Unknown,
        })
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn kind(&self) -> VesselKind {
        self.kind
    }

    pub fn current_temp(&self) -> f64 {
        self.current_temp
    }

    pub fn target_temp(&self) -> f64 {
        self.target_temp
    }

    pub fn tolerance_c(&self) -> f64 {
        self.tolerance_c
    }

    pub fn last_update(&self) -> Timestamp {
        self.last_update
    }

    pub fn last_in_tolerance(&self) -> ToleranceState {
        self.last_in_tolerance
    }

    /// Name shown in alerts; falls back to the code when the name is blank.
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() {
            &self.code
        } else {
            name
        }
    }

    /// Current verdict of the tolerance evaluator, independent of the
    /// recorded state.
    pub fn in_tolerance(&self) -> bool {
        in_tolerance(self.current_temp, self.target_temp, self.tolerance_c)
    }

    pub(crate) fn set_current_temp(&mut self, celsius: f64, now: Timestamp) {
        self.current_temp = celsius;
        self.last_update = now;
    }

    pub(crate) fn set_target_temp(&mut self, celsius: f64, now: Timestamp) {
        self.target_temp = celsius;
        self.last_update = now;
    }

    pub(crate) fn set_tolerance_c(&mut self, celsius: f64, now: Timestamp) {
        self.tolerance_c = celsius;
        self.last_update = now;
    }

    pub(crate) fn record_tolerance(&mut self, state: ToleranceState) {
        self.last_in_tolerance = state;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
