//! Unit conversion domain.
//!
//! - [`category::Category`] — the five measurement categories
//! - [`table::ConversionTable`] — static ratio tables plus the temperature formula
//! - [`request::ConversionRequest`] — a validated conversion and its prompt form

pub mod category;
pub mod request;
pub mod table;
pub mod temperature;

use crate::core::error::DomainError;
use category::Category;
use table::ConversionTable;

/// Convert `value` using the built-in table, with the category given by name.
///
/// Fails with a lookup error if the category or either unit is unknown.
pub fn convert(category: &str, from_unit: &str, to_unit: &str, value: f64) -> Result<f64, DomainError> {
    let category: Category = category.parse()?;
    ConversionTable::standard().convert(category, from_unit, to_unit, value)
}
