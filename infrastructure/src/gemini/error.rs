//! Error types for the Gemini adapter

use unitchat_application::GatewayError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when calling the Generative Language API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Prompt was blocked: {0}")]
    Blocked(String),

    #[error("Response contained no text (finish reason: {0})")]
    NoText(String),
}

impl From<GeminiError> for GatewayError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            GeminiError::Http(e) => GatewayError::ConnectionError(e.to_string()),
            GeminiError::Api { status, message } => match status {
                401 | 403 => GatewayError::AuthenticationFailed(message),
                400 if message.contains("API key") => GatewayError::AuthenticationFailed(message),
                404 => GatewayError::ModelNotAvailable(message),
                429 => GatewayError::RateLimited(message),
                _ => GatewayError::RequestFailed(format!("HTTP {}: {}", status, message)),
            },
            GeminiError::Parse(msg) => GatewayError::InvalidResponse(msg),
            GeminiError::Blocked(reason) => {
                GatewayError::RequestFailed(format!("prompt blocked ({})", reason))
            }
            GeminiError::NoText(_) => GatewayError::EmptyResponse,
        }
    }
}
