//! Interactive converter module
//!
//! Provides a line-editor based session exposing local conversion,
//! assistant conversion, unit listing and free-text chat.

mod repl;

pub use repl::ConverterRepl;
