//! Application layer for unitchat
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::ask_assistant::AskAssistantUseCase;
pub use use_cases::convert_locally::{ConvertInput, ConvertLocallyUseCase};
pub use use_cases::send_chat_message::SendChatMessageUseCase;
