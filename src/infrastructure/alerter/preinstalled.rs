//! Caller-supplied alerter

use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::{AlerterResolver, InstallError};

/// An alerter the caller installed themselves. Nothing is written or checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreinstalledAlerter {
    path: PathBuf,
}

impl PreinstalledAlerter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl AlerterResolver for PreinstalledAlerter {
    async fn resolve(&self) -> Result<PathBuf, InstallError> {
        Ok(self.path.clone())
    }
}
