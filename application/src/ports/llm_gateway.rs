//! LLM Gateway port
//!
//! Defines the interface for communicating with the text-generation service.

use async_trait::async_trait;
use thiserror::Error;
use unitchat_domain::{Model, Prompt};

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Timeout")]
    Timeout,
}

/// Gateway for LLM communication
///
/// Each call is a single-turn request: no history, no system prompt, no
/// generation parameters. Implementations (adapters) live in the
/// infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send `prompt` to `model` and return the raw response text
    async fn generate(&self, model: &Model, prompt: &Prompt) -> Result<String, GatewayError>;
}
