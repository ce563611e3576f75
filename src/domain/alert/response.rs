//! Alerter reply

use std::fmt;

use serde::{Deserialize, Serialize};

/// What the user did with a notification, as reported by alerter.
///
/// Alerter prints more fields than these (delivery and activation
/// timestamps); they are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub activation_type: String,
    #[serde(default)]
    pub activation_value: String,
}

impl Response {
    /// Classify `activation_type`
    pub fn kind(&self) -> ActivationKind {
        ActivationKind::from(self.activation_type.as_str())
    }
}

/// Known activation types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationKind {
    /// Close button pressed
    Closed,
    /// Notification expired without interaction
    Timeout,
    /// Notification body clicked
    ContentsClicked,
    /// One of the action buttons pressed; the label is the activation value
    ActionClicked,
    /// Reply field submitted; the text is the activation value
    Replied,
    Other(String),
}

impl ActivationKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Closed => "closed",
            Self::Timeout => "timeout",
            Self::ContentsClicked => "contentsClicked",
            Self::ActionClicked => "actionClicked",
            Self::Replied => "replied",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for ActivationKind {
    fn from(s: &str) -> Self {
        match s {
            "closed" => Self::Closed,
            "timeout" => Self::Timeout,
            "contentsClicked" => Self::ContentsClicked,
            "actionClicked" => Self::ActionClicked,
            "replied" => Self::Replied,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ActivationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
