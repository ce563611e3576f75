//! Alerter resolver adapters
//!
//! Either extract the bundled executable or use one the caller provides.

mod embedded;
mod preinstalled;

pub use embedded::{
    default_install_dir, EmbeddedAlerter, ALERTER_FILE_NAME, BUNDLED_ALERTER, INSTALL_DIR_NAME,
};
pub use preinstalled::PreinstalledAlerter;

use std::path::PathBuf;

use crate::application::ports::AlerterResolver;

/// Pick the resolver: a custom path when given, the bundled alerter otherwise
pub fn create_resolver(custom_path: Option<PathBuf>) -> Box<dyn AlerterResolver> {
    match custom_path {
        Some(path) => Box::new(PreinstalledAlerter::new(path)),
        None => Box::new(EmbeddedAlerter::new()),
    }
}
