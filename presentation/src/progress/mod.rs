//! Progress reporting while waiting on the assistant

pub mod reporter;
