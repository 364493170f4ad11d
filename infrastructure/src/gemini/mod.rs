//! Gemini adapter
//!
//! Implements the [`LlmGateway`](unitchat_application::LlmGateway) port over
//! the Generative Language REST API.

pub mod error;
pub mod gateway;
pub mod types;
