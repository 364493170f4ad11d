//! Assistant reply value object

use serde::{Deserialize, Serialize};

/// Prefix used when a failed request is shown in place of an answer
pub const ERROR_PREFIX: &str = "Error: ";

/// What the assistant produced for one prompt (Value Object)
///
/// Failures are kept as their own variant so callers can tell them apart,
/// while [`AssistantReply::display_text`] renders both the same way the user
/// sees them: an answer, or `"Error: {details}"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "lowercase")]
pub enum AssistantReply {
    /// Response text, trimmed of surrounding whitespace
    Answer(String),
    /// Description of why the request failed
    Failed(String),
}

impl AssistantReply {
    /// Build an answer from raw response text, trimming surrounding whitespace
    pub fn answer(text: impl AsRef<str>) -> Self {
        AssistantReply::Answer(text.as_ref().trim().to_string())
    }

    pub fn failed(details: impl Into<String>) -> Self {
        AssistantReply::Failed(details.into())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, AssistantReply::Failed(_))
    }

    /// Text shown to the user
    pub fn display_text(&self) -> String {
        match self {
            AssistantReply::Answer(text) => text.clone(),
            AssistantReply::Failed(details) => format!("{ERROR_PREFIX}{details}"),
        }
    }
}

impl std::fmt::Display for AssistantReply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_text())
    }
}
