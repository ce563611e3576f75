//! Alerter resolver port interface
//!
//! Decides where the alerter executable lives, installing it first if the
//! implementation needs to.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// Installation errors. None of them are retried.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("No alerter executable was bundled into this build")]
    MissingPayload,

    #[error("Failed to create install directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to inspect {}: {source}", .path.display())]
    Inspect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write alerter to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to make {} executable: {source}", .path.display())]
    Permissions {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Install task failed: {0}")]
    Task(String),
}

impl InstallError {
    /// The path the failed operation targeted, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::CreateDir { path, .. }
            | Self::Inspect { path, .. }
            | Self::Write { path, .. }
            | Self::Permissions { path, .. } => Some(path),
            Self::MissingPayload | Self::Task(_) => None,
        }
    }
}

/// Port for locating (and if needed installing) the alerter executable
#[async_trait]
pub trait AlerterResolver: Send + Sync {
    /// Return the path of a ready-to-run alerter.
    async fn resolve(&self) -> Result<PathBuf, InstallError>;
}

/// Blanket implementation for boxed resolver types
#[async_trait]
impl AlerterResolver for Box<dyn AlerterResolver> {
    async fn resolve(&self) -> Result<PathBuf, InstallError> {
        self.as_ref().resolve().await
    }
}
