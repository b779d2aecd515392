//! Temperature units accepted on the telemetry endpoint.

/// Unit of an incoming temperature reading. Readings are always stored in
/// Celsius.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Recognise a unit code (`C`, `F`, `celsius`, `fahrenheit`, any case).
    ///
    /// Returns `None` for anything else; callers treat that as Celsius.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "c" | "celsius" => Some(Self::Celsius),
            "f" | "fahrenheit" => Some(Self::Fahrenheit),
            _ => None,
        }
    }

    /// Convert a reading in this unit to degrees Celsius.
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        }
    }
}
