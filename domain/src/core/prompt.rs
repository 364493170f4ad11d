//! Prompt value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Text sent to the assistant as a single-turn prompt (Value Object)
///
/// The content is never blank. It is kept verbatim otherwise, so chat input
/// reaches the assistant exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    content: String,
}

impl Prompt {
    /// Create a new prompt
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.trim().is_empty(), "Prompt cannot be empty");
        Self { content }
    }

    /// Try to create a new prompt, returning an error if it is blank
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(DomainError::EmptyPrompt)
        } else {
            Ok(Self { content })
        }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
