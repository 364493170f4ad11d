//! Chat domain.
//!
//! - [`transcript::Transcript`] — the per-session, append-only chat record
//! - [`reply::AssistantReply`] — an answer or a failure from the assistant

pub mod reply;
pub mod transcript;
