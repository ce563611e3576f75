//! Send notification use case

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::alert::{build_arguments, Notification, Response, Timeout};
use crate::domain::error::ValidationError;

use super::ports::{AlerterResolver, CommandExecutor, ExecutionError, InstallError};

/// Errors from sending a notification
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Required field missing; nothing was spawned
    #[error("Invalid notification: {0}")]
    Validation(#[from] ValidationError),

    #[error("Alerter failed: {0}")]
    Execution(#[from] ExecutionError),

    #[error("Error decoding response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Sends notifications through an alerter executable.
///
/// Holds only the executable location and defaults, so one notifier can be
/// shared by any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct Notifier<E> {
    alerter_path: PathBuf,
    executor: E,
    default_timeout: Timeout,
}

impl<E: CommandExecutor> Notifier<E> {
    /// Use the alerter at `alerter_path` without installing anything
    pub fn new(alerter_path: impl Into<PathBuf>, executor: E) -> Self {
        Self {
            alerter_path: alerter_path.into(),
            executor,
            default_timeout: Timeout::NEVER,
        }
    }

    /// Ask `resolver` for the alerter location, installing it if needed
    pub async fn resolve<R>(resolver: &R, executor: E) -> Result<Self, InstallError>
    where
        R: AlerterResolver + ?Sized,
    {
        let alerter_path = resolver.resolve().await?;
        tracing::debug!(path = %alerter_path.display(), "alerter resolved");
        Ok(Self::new(alerter_path, executor))
    }

    /// Timeout for notifications that do not set their own.
    /// Defaults to [`Timeout::NEVER`], which passes no `-timeout` flag.
    pub fn with_default_timeout(mut self, timeout: Timeout) -> Self {
        self.default_timeout = timeout;
        self
    }

    pub fn alerter_path(&self) -> &Path {
        &self.alerter_path
    }

    pub fn default_timeout(&self) -> Timeout {
        self.default_timeout
    }

    /// Show `notification` and wait for the user's reaction.
    ///
    /// Does not return until alerter exits: the user acted on the
    /// notification, or its timeout expired. Interaction after the timeout
    /// is not captured.
    pub async fn send(&self, notification: &Notification) -> Result<Response, NotifyError> {
        notification.validate()?;

        let args = build_arguments(notification, self.default_timeout);
        tracing::debug!(
            alerter = %self.alerter_path.display(),
            ?args,
            "sending notification"
        );

        let output = self.executor.run(&self.alerter_path, &args).await?;

        let response: Response =
            serde_json::from_slice(&output).map_err(NotifyError::Decode)?;
        tracing::debug!(
            activation_type = %response.activation_type,
            activation_value = %response.activation_value,
            "notification answered"
        );

        Ok(response)
    }
}
