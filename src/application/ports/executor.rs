//! Command executor port interface

use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// Execution errors
#[derive(Debug, Clone, Error)]
pub enum ExecutionError {
    #[error("Executable not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to start {}: {message}", .program.display())]
    SpawnFailed { program: PathBuf, message: String },

    #[error("{} exited with {status}: {stderr}", .program.display())]
    Failed {
        program: PathBuf,
        status: ExitStatus,
        stderr: String,
    },
}

/// Port for running an external program to completion
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run `program` with `args` and wait for it to exit.
    ///
    /// # Returns
    /// The captured standard output on a successful exit
    async fn run(&self, program: &Path, args: &[String]) -> Result<Vec<u8>, ExecutionError>;
}

/// Blanket implementation for boxed executor types
#[async_trait]
impl CommandExecutor for Box<dyn CommandExecutor> {
    async fn run(&self, program: &Path, args: &[String]) -> Result<Vec<u8>, ExecutionError> {
        self.as_ref().run(program, args).await
    }
}

/// Shared executors
#[async_trait]
impl<T: CommandExecutor + ?Sized> CommandExecutor for Arc<T> {
    async fn run(&self, program: &Path, args: &[String]) -> Result<Vec<u8>, ExecutionError> {
        self.as_ref().run(program, args).await
    }
}
