//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as the assistant model and an optional request timeout.

use std::time::Duration;
use unitchat_domain::Model;

/// Application behavior configuration.
///
/// By default no timeout is applied, so a request waits as long as the
/// underlying HTTP client allows.
#[derive(Debug, Clone, Default)]
pub struct BehaviorConfig {
    /// Model every assistant request is sent to.
    pub model: Model,
    /// Maximum time to wait for an assistant response before giving up.
    pub timeout: Option<Duration>,
}

impl BehaviorConfig {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            timeout: None,
        }
    }

    /// Set the timeout from an optional number of seconds.
    ///
    /// If `seconds` is `None`, no timeout is applied.
    pub fn with_timeout_seconds(mut self, seconds: Option<u64>) -> Self {
        self.timeout = seconds.map(Duration::from_secs);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_timeout() {
        let config = BehaviorConfig::default();
        assert_eq!(config.model, Model::Gemini15Flash);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_with_timeout_seconds() {
        let config = BehaviorConfig::new(Model::Gemini15Pro).with_timeout_seconds(Some(30));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));

        let config = config.with_timeout_seconds(None);
        assert!(config.timeout.is_none());
    }
}
