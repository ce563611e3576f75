//! tokio::process command executor

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{CommandExecutor, ExecutionError};

/// Runs programs as child processes and captures their stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandExecutor for ProcessExecutor {
    async fn run(&self, program: &Path, args: &[String]) -> Result<Vec<u8>, ExecutionError> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ExecutionError::NotFound(program.to_path_buf())
                } else {
                    ExecutionError::SpawnFailed {
                        program: program.to_path_buf(),
                        message: e.to_string(),
                    }
                }
            })?;

        if !output.status.success() {
            return Err(ExecutionError::Failed {
                program: program.to_path_buf(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}
