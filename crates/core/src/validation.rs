//! Shared range validation helpers.
//!
//! All bounds are inclusive. Non-finite values (NaN, infinities) are always
//! rejected so a corrupt reading can never reach the evaluator.

use crate::error::CoreError;

/// Accepted telemetry readings, in degrees Celsius.
pub const READING_MIN_C: f64 = -10.0;
pub const READING_MAX_C: f64 = 120.0;

/// Accepted operator setpoints, in degrees Celsius.
pub const SETPOINT_MIN_C: f64 = 0.0;
pub const SETPOINT_MAX_C: f64 = 100.0;

/// Accepted tolerance half-widths, in degrees Celsius.
pub const TOLERANCE_MIN_C: f64 = 0.0;
pub const TOLERANCE_MAX_C: f64 = 50.0;

/// Validate that `value` falls within `[min, max]`.
///
/// Returns a `CoreError::OutOfRange` naming the field otherwise.
pub fn validate_range(value: f64, field: &'static str, min: f64, max: f64) -> Result<(), CoreError> {
    if !value.is_finite() || !(min..=max).contains(&value) {
        return Err(CoreError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

pub fn validate_reading(celsius: f64) -> Result<(), CoreError> {
    validate_range(celsius, "temperature", READING_MIN_C, READING_MAX_C)
}

pub fn validate_setpoint(celsius: f64) -> Result<(), CoreError> {
    validate_range(celsius, "targetTemp", SETPOINT_MIN_C, SETPOINT_MAX_C)
}

pub fn validate_tolerance(celsius: f64) -> Result<(), CoreError> {
    validate_range(celsius, "toleranceC", TOLERANCE_MIN_C, TOLERANCE_MAX_C)
}
