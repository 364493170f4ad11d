//! Infrastructure layer for unitchat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;

// Re-export commonly used types
pub use config::{
    API_KEY_VAR, ApiCredentials, ConfigError, ConfigLoader, ConfigValidationError,
    DEFAULT_API_BASE, FileAssistantConfig, FileConfig, FileOutputConfig, FileReplConfig,
};
pub use gemini::{
    error::{GeminiError, Result},
    gateway::GeminiLlmGateway,
};
