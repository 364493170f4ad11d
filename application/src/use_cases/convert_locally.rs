//! Convert Locally use case.
//!
//! Resolves the user's selections against the static conversion table and
//! performs the arithmetic conversion. Nothing leaves the process.

use tracing::debug;
use unitchat_domain::{Category, ConversionRequest, ConversionResult, ConversionTable, DomainError};

/// Raw selections collected by the UI
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertInput {
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
    pub value: f64,
}

impl ConvertInput {
    pub fn new(
        category: impl Into<String>,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            category: category.into(),
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
            value,
        }
    }
}

/// Use case for table-based conversions and the unit catalog
#[derive(Debug, Clone, Copy)]
pub struct ConvertLocallyUseCase {
    table: &'static ConversionTable,
}

impl Default for ConvertLocallyUseCase {
    fn default() -> Self {
        Self::new(ConversionTable::standard())
    }
}

impl ConvertLocallyUseCase {
    pub fn new(table: &'static ConversionTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'static ConversionTable {
        self.table
    }

    /// Validate raw selections into a [`ConversionRequest`]
    pub fn request(&self, input: &ConvertInput) -> Result<ConversionRequest, DomainError> {
        let category: Category = input.category.parse()?;
        ConversionRequest::new(
            self.table,
            category,
            &input.from_unit,
            &input.to_unit,
            input.value,
        )
    }

    /// Convert the selections locally
    pub fn execute(&self, input: &ConvertInput) -> Result<ConversionResult, DomainError> {
        let request = self.request(input)?;
        let result = request.convert_with(self.table)?;

        debug!(
            category = %request.category,
            from = %request.from_unit,
            to = %request.to_unit,
            input = request.value,
            output = result.value,
            "Converted locally"
        );

        Ok(result)
    }

    /// Categories offered to the user
    pub fn categories(&self) -> Vec<Category> {
        self.table.categories()
    }

    /// Units offered for `category`
    pub fn units(&self, category: &str) -> Result<(Category, Vec<&'static str>), DomainError> {
        let category: Category = category.parse()?;
        Ok((category, self.table.units(category)?))
    }
}
