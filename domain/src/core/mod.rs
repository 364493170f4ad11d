//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — the generative model the assistant talks to
//! - [`prompt::Prompt`] — a non-blank prompt for the assistant
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod model;
pub mod prompt;
pub mod string;
