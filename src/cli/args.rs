//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::alert::{Notification, Timeout};

/// mac-notify - macOS notifications with actions
#[derive(Parser, Debug)]
#[command(name = "mac-notify")]
#[command(version)]
#[command(about = "Show a macOS notification and report how the user answered it")]
#[command(long_about = None)]
pub struct Cli {
    /// Notification title
    #[arg(short = 't', long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Notification body
    #[arg(short = 'm', long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Line shown between title and body
    #[arg(short = 's', long, value_name = "TEXT")]
    pub subtitle: Option<String>,

    /// Image shown inside the notification
    #[arg(long, value_name = "PATH")]
    pub content_image: Option<PathBuf>,

    /// Label of the close button
    #[arg(long, value_name = "LABEL")]
    pub close_label: Option<String>,

    /// Add an action button (repeatable; labels must not contain commas)
    #[arg(short = 'a', long = "action", value_name = "LABEL")]
    pub actions: Vec<String>,

    /// Dismiss after this long (e.g., 10, 30s, 1m30s; 0 or never to wait for the user)
    #[arg(long, value_name = "TIME", allow_hyphen_values = true)]
    pub timeout: Option<String>,

    /// Use an installed alerter instead of the bundled one
    #[arg(long, value_name = "PATH")]
    pub alerter_path: Option<PathBuf>,

    /// Print the response as JSON
    #[arg(long)]
    pub json: bool,

    /// Log what is being run
    #[arg(short = 'v', long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The notification described by the flags.
    ///
    /// Missing title or message are left empty and rejected when sending.
    /// The timeout is not set here; it is applied as the notifier default.
    pub fn notification(&self, close_label: Option<&str>) -> Notification {
        let mut notification = Notification::new(
            self.title.clone().unwrap_or_default(),
            self.message.clone().unwrap_or_default(),
        )
        .actions(self.actions.iter().cloned());

        if let Some(subtitle) = &self.subtitle {
            notification = notification.subtitle(subtitle.clone());
        }
        if let Some(image) = &self.content_image {
            notification = notification.content_image(image.clone());
        }
        if let Some(label) = close_label {
            notification = notification.close_label(label);
        }

        notification
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Extract the bundled alerter and print where it lives
    Install,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed options for sending one notification
#[derive(Debug, Clone)]
pub struct SendOptions {
    pub notification: Notification,
    pub alerter_path: Option<PathBuf>,
    pub timeout: Timeout,
    pub json: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["alerter_path", "timeout", "close_label"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
