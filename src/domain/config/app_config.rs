//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::alert::Timeout;

/// Timeout the CLI applies when neither the config nor the command line set one
pub const DEFAULT_TIMEOUT_SECS: u32 = 10;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Use this alerter instead of installing the bundled one
    pub alerter_path: Option<String>,
    pub timeout: Option<String>,
    pub close_label: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            alerter_path: None,
            timeout: Some(Timeout::from_secs(DEFAULT_TIMEOUT_SECS).to_string()),
            close_label: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            alerter_path: other.alerter_path.or(self.alerter_path),
            timeout: other.timeout.or(self.timeout),
            close_label: other.close_label.or(self.close_label),
        }
    }

    /// Get timeout as parsed Timeout, or default if not set/invalid
    pub fn timeout_or_default(&self) -> Timeout {
        self.timeout
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(Timeout::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Custom alerter location, `None` when the bundled one should be installed
    pub fn alerter_path(&self) -> Option<PathBuf> {
        self.alerter_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    }

    /// Close button label, `None` when unset or empty
    pub fn close_label(&self) -> Option<&str> {
        self.close_label.as_deref().filter(|l| !l.is_empty())
    }
}
