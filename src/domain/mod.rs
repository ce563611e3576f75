//! Domain layer - Core business logic
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod alert;
pub mod config;
pub mod error;

// Re-export common types
pub use alert::{ActivationKind, Notification, Response, Timeout};
pub use config::AppConfig;
pub use error::*;
