//! Notification value object

use std::path::PathBuf;

use crate::domain::error::{InvalidTimeoutError, ValidationError};

use super::timeout::Timeout;

/// Everything one alerter invocation shows.
///
/// Built fresh for every call and handed to [`Notifier::send`] by reference;
/// the notifier itself keeps no per-notification state.
///
/// Required fields are checked when the notification is sent, not when it
/// is built.
///
/// [`Notifier::send`]: crate::application::Notifier::send
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub subtitle: Option<String>,
    /// Image shown inside the notification body
    pub content_image: Option<PathBuf>,
    /// Label of the close button (alerter's own default when unset)
    pub close_label: Option<String>,
    /// Button labels, in display order.
    ///
    /// These reach alerter as one comma-joined value, so a label that itself
    /// contains a comma is split into two buttons.
    pub actions: Vec<String>,
    timeout: Option<Timeout>,
}

impl Notification {
    /// Create a notification with the two required fields
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn content_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.content_image = Some(path.into());
        self
    }

    pub fn close_label(mut self, label: impl Into<String>) -> Self {
        self.close_label = Some(label.into());
        self
    }

    /// Append one action button
    pub fn action(mut self, label: impl Into<String>) -> Self {
        self.actions.push(label.into());
        self
    }

    /// Replace all action buttons
    pub fn actions<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.actions = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timeout(mut self, timeout: Timeout) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the timeout from a signed number of seconds.
    ///
    /// Negative values are rejected here, long before anything is sent.
    pub fn set_timeout(&mut self, seconds: i64) -> Result<(), InvalidTimeoutError> {
        self.timeout = Some(Timeout::try_from_secs(seconds)?);
        Ok(())
    }

    /// The explicitly configured timeout, if any
    pub fn timeout(&self) -> Option<Timeout> {
        self.timeout
    }

    /// Check the required fields
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.message.is_empty() {
            return Err(ValidationError::MissingMessage);
        }
        if self.title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        Ok(())
    }
}
