//! Presentation layer for unitchat
//!
//! This crate contains CLI definitions, output formatters,
//! the progress spinner, and the interactive converter REPL.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ConverterRepl;
pub use cli::commands::{Cli, Command, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
