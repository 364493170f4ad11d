//! Domain error types

use crate::conversion::category::Category;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("unknown unit '{unit}' for category '{category}'")]
    UnknownUnit { category: Category, unit: String },

    #[error("invalid value '{0}': expected a non-negative number")]
    InvalidValue(String),

    #[error("Prompt cannot be empty")]
    EmptyPrompt,
}

impl DomainError {
    /// Check if this error comes from a failed table lookup
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            DomainError::UnknownCategory(_) | DomainError::UnknownUnit { .. }
        )
    }
}
