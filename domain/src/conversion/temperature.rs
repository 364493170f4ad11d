//! Temperature conversion rule
//!
//! Temperature is affine, so it cannot share the ratio table used by the
//! other categories. Only Celsius and Fahrenheit are covered.

pub const CELSIUS: &str = "celsius";
pub const FAHRENHEIT: &str = "fahrenheit";

/// Units accepted by the temperature rule, in display order
pub const TEMPERATURE_UNITS: &[&str] = &[CELSIUS, FAHRENHEIT];

/// Convert a temperature between Celsius and Fahrenheit.
///
/// Any pair other than celsius→fahrenheit or fahrenheit→celsius returns
/// `value` unchanged. That includes same-unit pairs and unit names the rule
/// does not know.
pub fn convert_temperature(value: f64, from_unit: &str, to_unit: &str) -> f64 {
    match (from_unit, to_unit) {
        (CELSIUS, FAHRENHEIT) => value * 1.8 + 32.0,
        (FAHRENHEIT, CELSIUS) => (value - 32.0) / 1.8,
        _ => value,
    }
}
