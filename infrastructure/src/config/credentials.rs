//! API credential loading
//!
//! The credential comes from the process environment, falling back to a
//! `.env` file in the working directory or one of its parents. It is held as
//! a [`SecretString`], so it never shows up in `Debug` output or logs.

use secrecy::SecretString;
use thiserror::Error;
use tracing::debug;

/// Environment variable holding the Generative Language API key
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Errors raised while loading startup configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is missing. Set it in the environment or in a .env file before starting unitchat.")]
    MissingVariable(&'static str),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] super::file_config::ConfigValidationError),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// Credentials for the text-generation service
#[derive(Debug, Clone)]
pub struct ApiCredentials {
    api_key: SecretString,
}

impl ApiCredentials {
    /// Read the key from [`API_KEY_VAR`], then from `.env`
    ///
    /// The process environment wins over the file. The file is read without
    /// touching the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok().or_else(|| dotenv_value(name)))
    }

    /// Read the key through `lookup`, treating blank values as missing
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        match lookup(API_KEY_VAR) {
            Some(key) if !key.trim().is_empty() => Ok(Self {
                api_key: SecretString::from(key.trim().to_string()),
            }),
            _ => Err(ConfigError::MissingVariable(API_KEY_VAR)),
        }
    }

    pub fn into_api_key(self) -> SecretString {
        self.api_key
    }
}

/// Value of `name` in the nearest `.env` file, if any
fn dotenv_value(name: &str) -> Option<String> {
    let entries = dotenvy::dotenv_iter().ok()?;
    let value = entries
        .flatten()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value);
    if value.is_some() {
        debug!("Read {} from .env", name);
    }
    value
}
