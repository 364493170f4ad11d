//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod ask_assistant;
pub mod convert_locally;
pub mod send_chat_message;
