//! Default notifier wiring

use std::path::PathBuf;

use crate::application::ports::InstallError;
use crate::application::Notifier;

use super::alerter::EmbeddedAlerter;
use super::process::ProcessExecutor;

/// Notifier that runs alerter as a real child process
pub type DefaultNotifier = Notifier<ProcessExecutor>;

impl Notifier<ProcessExecutor> {
    /// Install the bundled alerter (if not already present) and use it
    pub async fn install() -> Result<Self, InstallError> {
        Self::resolve(&EmbeddedAlerter::new(), ProcessExecutor::new()).await
    }

    /// Use an alerter that is already installed at `path`.
    /// Nothing is written to disk.
    pub fn with_custom_path(path: impl Into<PathBuf>) -> Self {
        Self::new(path, ProcessExecutor::new())
    }
}
