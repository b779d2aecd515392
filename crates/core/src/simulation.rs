//! Pull-based temperature simulation used while live telemetry is off.
//!
//! Each step adds uniform jitter in `[-0.3, 0.3]` and a damped pull of 5% of
//! the distance to the target, clamps to the vessel's range and rounds to two
//! decimals.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Serialize;

use crate::error::CoreError;
use crate::types::Timestamp;
use crate::vessel::{Vessel, VesselKind};

/// Maximum random jitter per step, in degrees.
pub const JITTER_C: f64 = 0.3;

/// Fraction of the distance to target closed per step.
pub const PULL_FACTOR: f64 = 0.05;

/// Simulated fermenters stay within this range.
pub const FERMENTER_RANGE_C: (f64, f64) = (15.0, 25.0);

/// Every other simulated vessel stays within this range.
pub const DEFAULT_RANGE_C: (f64, f64) = (0.0, 100.0);

/// Where current temperatures come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TelemetryMode {
    /// Temperatures drift toward target each time vessels are listed.
    #[default]
    Simulated,
    /// Temperatures change only through submitted telemetry.
    Live,
}

impl TelemetryMode {
    pub fn is_simulated(self) -> bool {
        self == Self::Simulated
    }
}

impl FromStr for TelemetryMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simulated" | "dummy" => Ok(Self::Simulated),
            "live" => Ok(Self::Live),
            other => Err(CoreError::Validation(format!(
                "unknown telemetry mode '{other}' (expected 'simulated' or 'live')"
            ))),
        }
    }
}

impl fmt::Display for TelemetryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simulated => f.write_str("simulated"),
            Self::Live => f.write_str("live"),
        }
    }
}

/// Clamping range for a vessel category.
pub fn clamp_range(kind: VesselKind) -> (f64, f64) {
    match kind {
        VesselKind::Fermenter => FERMENTER_RANGE_C,
        _ => DEFAULT_RANGE_C,
    }
}

/// Compute the next simulated temperature.
pub fn next_temperature<R: Rng + ?Sized>(
    kind: VesselKind,
    current: f64,
    target: f64,
    rng: &mut R,
) -> f64 {
    let step = rng.random_range(-JITTER_C..=JITTER_C) + (target - current) * PULL_FACTOR;
    let (min, max) = clamp_range(kind);
    let next = (current + step).clamp(min, max);
    (next * 100.0).round() / 100.0
}

/// Advance one vessel by a single simulation step.
///
/// Does not touch the recorded tolerance state.
pub fn step<R: Rng + ?Sized>(vessel: &mut Vessel, rng: &mut R, now: Timestamp) {
    let next = next_temperature(vessel.kind(), vessel.current_temp(), vessel.target_temp(), rng);
    vessel.set_current_temp(next, now);
}

/// [`step`] using the thread-local generator.
pub fn simulate(vessel: &mut Vessel, now: Timestamp) {
    step(vessel, &mut rand::rng(), now);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
