//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use unitchat_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format for one-shot commands
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

impl OutputConfig {
    /// Apply the global color switch for everything written through `colored`
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Show a spinner while waiting on the assistant
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl ReplConfig {
    /// Resolved history file location.
    ///
    /// A leading `~/` is expanded to the home directory; without a configured
    /// path the file lives in the platform data directory.
    pub fn history_path(&self) -> Option<PathBuf> {
        match self.history_file.as_deref() {
            Some(path) => match path.strip_prefix("~/") {
                Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
                None => Some(PathBuf::from(path)),
            },
            None => dirs::data_dir().map(|d| d.join("unitchat").join("history.txt")),
        }
    }
}
