//! Measurement category value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A measurement category offered by the converter (Value Object)
///
/// The declaration order is the order categories are presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Area,
    Volume,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 5] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Area,
        Category::Volume,
    ];

    /// Get the canonical (lowercase) name of this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
            Category::Area => "area",
            Category::Volume => "volume",
        }
    }

    /// Check if this category is converted by a formula rather than ratios
    pub fn is_formula(&self) -> bool {
        matches!(self, Category::Temperature)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == name)
            .ok_or_else(|| DomainError::UnknownCategory(s.trim().to_string()))
    }
}
