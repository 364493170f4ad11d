//! Conversion request and result value objects

use super::category::Category;
use super::table::ConversionTable;
use crate::core::error::DomainError;
use crate::core::prompt::Prompt;
use serde::{Deserialize, Serialize};

/// A validated conversion request (Value Object)
///
/// Units are stored in their canonical spelling and the value is finite and
/// non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub category: Category,
    pub from_unit: String,
    pub to_unit: String,
    pub value: f64,
}

impl ConversionRequest {
    /// Build a request, checking the units against `table`
    pub fn new(
        table: &ConversionTable,
        category: Category,
        from_unit: &str,
        to_unit: &str,
        value: f64,
    ) -> Result<Self, DomainError> {
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::InvalidValue(format_value(value)));
        }

        Ok(Self {
            category,
            from_unit: table.resolve_unit(category, from_unit)?.to_string(),
            to_unit: table.resolve_unit(category, to_unit)?.to_string(),
            value,
        })
    }

    /// Parse a request from raw user input (category, units and value as text)
    pub fn parse(
        table: &ConversionTable,
        category: &str,
        from_unit: &str,
        to_unit: &str,
        value: &str,
    ) -> Result<Self, DomainError> {
        let category: Category = category.parse()?;
        let value: f64 = value
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidValue(value.trim().to_string()))?;
        Self::new(table, category, from_unit, to_unit, value)
    }

    /// Natural-language instruction for the assistant
    pub fn to_prompt(&self) -> Prompt {
        Prompt::new(format!(
            "Convert {} {} to {}.",
            format_value(self.value),
            self.from_unit,
            self.to_unit
        ))
    }

    /// Run the conversion locally against `table`
    pub fn convert_with(&self, table: &ConversionTable) -> Result<ConversionResult, DomainError> {
        let value = table.convert(self.category, &self.from_unit, &self.to_unit, self.value)?;
        Ok(ConversionResult {
            request: self.clone(),
            value,
        })
    }
}

/// Outcome of a local conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub request: ConversionRequest,
    pub value: f64,
}

impl ConversionResult {
    /// Target unit of the conversion
    pub fn unit(&self) -> &str {
        &self.request.to_unit
    }
}

/// Render a number for display.
///
/// Whole numbers keep one decimal place (`5` → `5.0`) so that integral
/// inputs and results read as measurements rather than counts. Magnitudes
/// below `1e-4` or from `1e16` up use exponent form with a signed, two-digit
/// exponent (`6.21371e-07`, `1e+16`).
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return scientific(value);
    }

    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Shortest round-trip mantissa with an exponent like `e-07` / `e+16`
fn scientific(value: f64) -> String {
    let rendered = format!("{value:e}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => rendered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> &'static ConversionTable {
        ConversionTable::standard()
    }

    #[test]
    fn test_prompt_text() {
        let request =
            ConversionRequest::new(table(), Category::Length, "mile", "kilometer", 5.0).unwrap();
        assert_eq!(request.to_prompt().content(), "Convert 5.0 mile to kilometer.");
    }

    #[test]
    fn test_prompt_keeps_fraction() {
        let request =
            ConversionRequest::new(table(), Category::Weight, "pound", "gram", 2.5).unwrap();
        assert_eq!(request.to_prompt().content(), "Convert 2.5 pound to gram.");
    }

    #[test]
    fn test_units_are_canonicalized() {
        let request =
            ConversionRequest::new(table(), Category::Temperature, "Celsius", "FAHRENHEIT", 10.0)
                .unwrap();
        assert_eq!(request.from_unit, "celsius");
        assert_eq!(request.to_unit, "fahrenheit");
    }

    #[test]
    fn test_negative_value_rejected() {
        let err = ConversionRequest::new(table(), Category::Length, "meter", "yard", -1.0)
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue(_)));
    }

    #[test]
    fn test_nan_rejected() {
        assert!(
            ConversionRequest::new(table(), Category::Length, "meter", "yard", f64::NAN).is_err()
        );
    }

    #[test]
    fn test_parse_from_text() {
        let request = ConversionRequest::parse(table(), "length", "meter", "kilometer", "1000")
            .unwrap();
        let result = request.convert_with(table()).unwrap();
        assert!((result.value - 1.0).abs() < 1e-12);
        assert_eq!(result.unit(), "kilometer");
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        let err = ConversionRequest::parse(table(), "speed", "kph", "mph", "1").unwrap_err();
        assert!(matches!(err, DomainError::UnknownCategory(_)));
    }

    #[test]
    fn test_parse_rejects_garbage_value() {
        let err =
            ConversionRequest::parse(table(), "length", "meter", "mile", "ten").unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue(ref v) if v == "ten"));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(5.0), "5.0");
        assert_eq!(format_value(0.0), "0.0");
        assert_eq!(format_value(0.25), "0.25");
        assert_eq!(format_value(1000.0), "1000.0");
    }

    #[test]
    fn test_format_value_uses_exponent_outside_plain_range() {
        assert_eq!(format_value(6.21371e-7), "6.21371e-07");
        assert_eq!(format_value(1e16), "1e+16");
        assert_eq!(format_value(2.5e20), "2.5e+20");
        assert_eq!(format_value(1.5e-123), "1.5e-123");
        assert_eq!(format_value(0.0001), "0.0001");
        assert_eq!(format_value(9999999999999998.0), "9999999999999998.0");
    }

    #[test]
    fn test_tiny_result_renders_in_exponent_form() {
        let request =
            ConversionRequest::new(table(), Category::Length, "meter", "mile", 0.001).unwrap();
        let result = request.convert_with(table()).unwrap();
        assert_eq!(format_value(result.value), "6.21371e-07");
    }
}
