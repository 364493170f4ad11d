//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use unitchat_application::BehaviorConfig;
use unitchat_domain::{Model, OutputFormat};

/// Default endpoint of the Generative Language API
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("api_base cannot be empty")]
    EmptyApiBase,
}

/// Raw assistant configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAssistantConfig {
    /// Model every request is sent to
    pub model: Model,
    /// Base URL of the Generative Language API
    pub api_base: String,
    /// Timeout in seconds for API calls (unset: no override)
    pub timeout_seconds: Option<u64>,
}

impl Default for FileAssistantConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_seconds: None,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show a spinner while waiting on the assistant
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

/// Complete file configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub assistant: FileAssistantConfig,
    pub output: FileOutputConfig,
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(0) = self.assistant.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.assistant.model.as_str().trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if self.assistant.api_base.trim().is_empty() {
            return Err(ConfigValidationError::EmptyApiBase);
        }

        Ok(())
    }

    /// Application behavior derived from the `[assistant]` section
    pub fn behavior(&self) -> BehaviorConfig {
        BehaviorConfig::new(self.assistant.model.clone())
            .with_timeout_seconds(self.assistant.timeout_seconds)
    }
}
