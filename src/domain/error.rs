//! Domain error types

use thiserror::Error;

/// Error when a timeout value is negative or cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid timeout: \"{input}\". Expected a number of seconds >= 0 or a duration (e.g., 10, 30s, 1m30s, never)")]
pub struct InvalidTimeoutError {
    pub input: String,
}

/// A notification is missing one of its required fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("message must be set")]
    MissingMessage,

    #[error("title must be set")]
    MissingTitle,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
