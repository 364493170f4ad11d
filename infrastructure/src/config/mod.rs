//! Configuration loading for unitchat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `UNITCHAT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./unitchat.toml` or `./.unitchat.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/unitchat/config.toml`
//! 5. Default values
//!
//! The API credential is loaded separately from `GOOGLE_API_KEY`.

mod credentials;
mod file_config;
mod loader;

pub use credentials::{API_KEY_VAR, ApiCredentials, ConfigError};
pub use file_config::{
    ConfigValidationError, DEFAULT_API_BASE, FileAssistantConfig, FileConfig, FileOutputConfig,
    FileReplConfig,
};
pub use loader::ConfigLoader;
