//! mac-notify - macOS notifications with actions
//!
//! Shows notifications through [alerter], a command-line tool bundled into
//! this crate at build time and extracted to the system temp directory on
//! first use, and reports how the user answered.
//!
//! ```no_run
//! use mac_notify::{DefaultNotifier, Notification};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let notifier = DefaultNotifier::install().await?;
//! let response = notifier
//!     .send(&Notification::new("Build finished", "Deploy now?").actions(["Deploy", "Later"]))
//!     .await?;
//! println!("{}: {}", response.activation_type, response.activation_value);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Notification, timeout and response value objects, argument building
//! - **Application**: The `Notifier` service and port interfaces (traits)
//! - **Infrastructure**: Alerter installation, process execution, config storage
//! - **CLI**: Command-line interface and argument parsing
//!
//! [alerter]: https://github.com/vjeantet/alerter

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

pub use application::{Notifier, NotifyError};
pub use domain::{ActivationKind, Notification, Response, Timeout};
pub use infrastructure::DefaultNotifier;
