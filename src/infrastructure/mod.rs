//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces:
//! alerter installation, process execution and config storage.

pub mod alerter;
pub mod config;
pub mod notifier;
pub mod process;

// Re-export adapters
pub use alerter::{create_resolver, EmbeddedAlerter, PreinstalledAlerter};
pub use config::XdgConfigStore;
pub use notifier::DefaultNotifier;
pub use process::ProcessExecutor;
