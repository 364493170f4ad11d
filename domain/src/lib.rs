//! Domain layer for unitchat
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Conversion
//!
//! A static [`ConversionTable`] maps each [`Category`] to a rule:
//!
//! - **Ratio**: linear units with a factor relative to a base unit
//! - **Formula**: affine units (temperature) converted by a closed form
//!
//! ## Chat
//!
//! The [`Transcript`] is the on-screen record of a chat session. It is owned
//! by the session and only ever appended to.

pub mod chat;
pub mod config;
pub mod conversion;
pub mod core;

// Re-export commonly used types
pub use chat::{
    reply::{AssistantReply, ERROR_PREFIX},
    transcript::{Speaker, Transcript, TranscriptEntry},
};
pub use config::OutputFormat;
pub use conversion::{
    category::Category,
    convert,
    request::{ConversionRequest, ConversionResult, format_value},
    table::{CategoryRule, ConversionTable, FormulaFn},
    temperature::convert_temperature,
};
pub use self::core::{error::DomainError, model::Model, prompt::Prompt, string::truncate};
