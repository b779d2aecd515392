//! Edge-triggered tolerance alerts.
//!
//! [`evaluate`] is the alert state machine. It records the latest tolerance
//! verdict on the vessel every time it runs and returns an alert only when
//! the verdict flips between two known states:
//!
//! ```text
//!            in tolerance                 out of tolerance
//!  Unknown ───────────────► InTolerance ◄──────────────────► OutOfTolerance
//!     │        (silent)                   alert on each edge       ▲
//!     └────────────────────────────────────────────────────────────┘
//!                              (silent)
//! ```
//!
//! Repeated readings in the same state produce nothing, so a sustained fault
//! raises exactly one alert.

use serde::Serialize;

use crate::types::{EntityId, Timestamp};
use crate::vessel::{ToleranceState, Vessel};

/// Direction of a tolerance transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    OutOfTolerance,
    BackWithinTolerance,
}

impl AlertKind {
    /// Headline used in notification subjects.
    pub fn headline(self) -> &'static str {
        match self {
            Self::OutOfTolerance => "OUT OF TOLERANCE",
            Self::BackWithinTolerance => "BACK WITHIN TOLERANCE",
        }
    }
}

/// A tolerance transition for one vessel, captured at evaluation time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VesselAlert {
    pub vessel_id: EntityId,
    pub vessel_code: String,
    /// Display name at evaluation time (falls back to the code).
    pub vessel_name: String,
    pub kind: AlertKind,
    pub current_temp: f64,
    pub target_temp: f64,
    pub tolerance_c: f64,
    pub timestamp: Timestamp,
}

impl VesselAlert {
    /// Notification subject, e.g. `"[JaxBrew] Fermenter 1 OUT OF TOLERANCE"`.
    pub fn subject(&self) -> String {
        format!("[JaxBrew] {} {}", self.vessel_name, self.kind.headline())
    }

    /// Notification body, e.g.
    /// `"Fermenter 1: current 22.3°C, target 19.0°C ± 2.0°C"`.
    pub fn body(&self) -> String {
        format!(
            "{}: current {:.1}°C, target {:.1}°C ± {:.1}°C",
            self.vessel_name, self.current_temp, self.target_temp, self.tolerance_c
        )
    }
}

/// Transition table of the state machine.
///
/// Returns the alert to raise when moving from `prev` to a verdict of
/// `in_tol`, or `None` when the move is silent.
pub fn transition(prev: ToleranceState, in_tol: bool) -> Option<AlertKind> {
    match (prev, in_tol) {
        (ToleranceState::InTolerance, false) => Some(AlertKind::OutOfTolerance),
        (ToleranceState::OutOfTolerance, true) => Some(AlertKind::BackWithinTolerance),
        _ => None,
    }
}

/// Run the state machine for `vessel`.
///
/// The recorded state always advances to the current verdict, including on
/// the first (silent) evaluation.
pub fn evaluate(vessel: &mut Vessel, now: Timestamp) -> Option<VesselAlert> {
    let in_tol = vessel.in_tolerance();
    let prev = vessel.last_in_tolerance();
    vessel.record_tolerance(ToleranceState::from(in_tol));

    let kind = transition(prev, in_tol)?;
    Some(VesselAlert {
        vessel_id: vessel.id(),
        vessel_code: vessel.code().to_string(),
        vessel_name: vessel.display_name().to_string(),
        kind,
        current_temp: vessel.current_temp(),
        target_temp: vessel.target_temp(),
        tolerance_c: vessel.tolerance_c(),
        timestamp: now,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
