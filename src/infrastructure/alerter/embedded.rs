//! Bundled alerter installer

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{AlerterResolver, InstallError};

/// Directory under the system temp dir that holds the installed alerter
pub const INSTALL_DIR_NAME: &str = "mac-notify";

/// File name of the installed alerter
pub const ALERTER_FILE_NAME: &str = "alerter";

/// The alerter executable bundled at build time (empty if none was provided)
pub static BUNDLED_ALERTER: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/alerter"));

#[cfg(unix)]
const EXECUTABLE_MODE: u32 = 0o755;

/// Default install directory: `<temp_dir>/mac-notify`
pub fn default_install_dir() -> PathBuf {
    std::env::temp_dir().join(INSTALL_DIR_NAME)
}

/// Extracts the bundled alerter into a fixed directory on first use.
///
/// An existing file at the target path is trusted as-is and never
/// rewritten. Concurrent installs are safe: each writer stages its own copy
/// and the first one to land wins.
#[derive(Debug, Clone)]
pub struct EmbeddedAlerter {
    install_dir: PathBuf,
    payload: &'static [u8],
}

impl EmbeddedAlerter {
    /// Install the bundled alerter into the default directory
    pub fn new() -> Self {
        Self {
            install_dir: default_install_dir(),
            payload: BUNDLED_ALERTER,
        }
    }

    /// Install into a custom directory
    pub fn with_install_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.install_dir = dir.into();
        self
    }

    /// Install a different executable
    pub fn with_payload(mut self, payload: &'static [u8]) -> Self {
        self.payload = payload;
        self
    }

    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    /// Where the alerter ends up
    pub fn target_path(&self) -> PathBuf {
        self.install_dir.join(ALERTER_FILE_NAME)
    }

    /// Make sure the alerter exists at [`target_path`](Self::target_path).
    pub async fn install(&self) -> Result<PathBuf, InstallError> {
        fs::create_dir_all(&self.install_dir)
            .await
            .map_err(|source| InstallError::CreateDir {
                path: self.install_dir.clone(),
                source,
            })?;

        let target = self.target_path();

        match fs::metadata(&target).await {
            Ok(_) => {
                tracing::debug!(path = %target.display(), "alerter already installed");
                return Ok(target);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(InstallError::Inspect {
                    path: target,
                    source,
                })
            }
        }

        if self.payload.is_empty() {
            return Err(InstallError::MissingPayload);
        }

        let dir = self.install_dir.clone();
        let dest = target.clone();
        let payload = self.payload;

        // tempfile is synchronous
        let written = tokio::task::spawn_blocking(move || write_staged(&dir, &dest, payload))
            .await
            .map_err(|e| InstallError::Task(e.to_string()))??;

        if written {
            tracing::info!(path = %target.display(), "installed alerter");
        } else {
            tracing::warn!(
                path = %target.display(),
                "alerter was installed concurrently, keeping the existing file"
            );
        }

        Ok(target)
    }
}

impl Default for EmbeddedAlerter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AlerterResolver for EmbeddedAlerter {
    async fn resolve(&self) -> Result<PathBuf, InstallError> {
        self.install().await
    }
}

/// Write `payload` to a temp file next to `target`, mark it executable and
/// move it into place unless something already exists there.
///
/// Returns `false` when another writer got there first. Something that
/// blocks the rename but does not resolve to a file (a dangling symlink) is
/// an error.
fn write_staged(dir: &Path, target: &Path, payload: &[u8]) -> Result<bool, InstallError> {
    let write_err = |source| InstallError::Write {
        path: target.to_path_buf(),
        source,
    };

    let mut staged = tempfile::Builder::new()
        .prefix(".alerter-")
        .tempfile_in(dir)
        .map_err(write_err)?;
    staged.write_all(payload).map_err(write_err)?;
    staged.as_file().sync_all().map_err(write_err)?;

    set_executable(staged.path()).map_err(|source| InstallError::Permissions {
        path: target.to_path_buf(),
        source,
    })?;

    match staged.persist_noclobber(target) {
        Ok(_) => Ok(true),
        Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => {
            std::fs::metadata(target)
                .map(|_| false)
                .map_err(|source| InstallError::Inspect {
                    path: target.to_path_buf(),
                    source,
                })
        }
        Err(e) => Err(write_err(e.error)),
    }
}

#[cfg(unix)]
fn set_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(EXECUTABLE_MODE))
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}
