//! Validated vessel mutations: telemetry readings, setpoints and tolerances.
//!
//! Every function validates first and mutates only on success, so a rejected
//! call leaves the vessel untouched. Only the reading functions run the alert
//! state machine; setpoint and tolerance changes take effect at the next
//! reading.

use crate::alert::{self, VesselAlert};
use crate::error::CoreError;
use crate::types::Timestamp;
use crate::units::TemperatureUnit;
use crate::validation::{validate_reading, validate_setpoint, validate_tolerance};
use crate::vessel::Vessel;

/// Apply a telemetry reading (in Celsius) and evaluate tolerance.
///
/// Returns the alert raised by the transition, if any.
pub fn apply_reading(
    vessel: &mut Vessel,
    celsius: f64,
    now: Timestamp,
) -> Result<Option<VesselAlert>, CoreError> {
    apply_reading_in(vessel, celsius, TemperatureUnit::Celsius, now)
}

/// Apply a reading submitted in `unit`.
///
/// The [-10, 120] range check applies to the value as submitted; conversion
/// to Celsius happens afterwards.
pub fn apply_reading_in(
    vessel: &mut Vessel,
    temperature: f64,
    unit: TemperatureUnit,
    now: Timestamp,
) -> Result<Option<VesselAlert>, CoreError> {
    validate_reading(temperature)?;
    vessel.set_current_temp(unit.to_celsius(temperature), now);
    Ok(alert::evaluate(vessel, now))
}

pub fn apply_setpoint(vessel: &mut Vessel, celsius: f64, now: Timestamp) -> Result<(), CoreError> {
    validate_setpoint(celsius)?;
    vessel.set_target_temp(celsius, now);
    Ok(())
}

pub fn apply_tolerance(vessel: &mut Vessel, celsius: f64, now: Timestamp) -> Result<(), CoreError> {
    validate_tolerance(celsius)?;
    vessel.set_tolerance_c(celsius, now);
    Ok(())
}
