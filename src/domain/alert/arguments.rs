//! Alerter command-line arguments

use super::notification::Notification;
use super::timeout::Timeout;

/// Ask alerter for a JSON reply instead of plain text
pub const FLAG_JSON: &str = "-json";
pub const FLAG_MESSAGE: &str = "-message";
pub const FLAG_TITLE: &str = "-title";
pub const FLAG_SUBTITLE: &str = "-subtitle";
pub const FLAG_TIMEOUT: &str = "-timeout";
pub const FLAG_CONTENT_IMAGE: &str = "-contentImage";
pub const FLAG_CLOSE_LABEL: &str = "-closeLabel";
pub const FLAG_ACTIONS: &str = "-actions";

/// Separator alerter splits `-actions` on
pub const ACTION_SEPARATOR: &str = ",";

/// Build the argument list for one alerter invocation.
///
/// The order is fixed. Optional values are only passed when non-empty so
/// alerter falls back to its own defaults. `default_timeout` applies when the
/// notification has none; a resolved timeout of zero emits no `-timeout` flag.
/// Action labels are joined without escaping.
pub fn build_arguments(notification: &Notification, default_timeout: Timeout) -> Vec<String> {
    let mut args = vec![FLAG_JSON.to_string()];

    push_flag(&mut args, FLAG_MESSAGE, &notification.message);
    push_flag(&mut args, FLAG_TITLE, &notification.title);

    if let Some(subtitle) = non_empty(notification.subtitle.as_deref()) {
        push_flag(&mut args, FLAG_SUBTITLE, subtitle);
    }

    let timeout = notification.timeout().unwrap_or(default_timeout);
    if !timeout.is_never() {
        push_flag(&mut args, FLAG_TIMEOUT, &timeout.as_secs().to_string());
    }

    if let Some(image) = notification.content_image.as_ref() {
        let image = image.to_string_lossy();
        if !image.is_empty() {
            push_flag(&mut args, FLAG_CONTENT_IMAGE, &image);
        }
    }

    if let Some(label) = non_empty(notification.close_label.as_deref()) {
        push_flag(&mut args, FLAG_CLOSE_LABEL, label);
    }

    if !notification.actions.is_empty() {
        push_flag(
            &mut args,
            FLAG_ACTIONS,
            &notification.actions.join(ACTION_SEPARATOR),
        );
    }

    args
}

fn push_flag(args: &mut Vec<String>, flag: &str, value: &str) {
    args.push(flag.to_string());
    args.push(value.to_string());
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
