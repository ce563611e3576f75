//! Main app runners

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::application::ports::ConfigStore;
use crate::application::{Notifier, NotifyError};
use crate::domain::config::AppConfig;
use crate::infrastructure::{create_resolver, EmbeddedAlerter, ProcessExecutor, XdgConfigStore};

use super::args::SendOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable pointing at an installed alerter
pub const ALERTER_PATH_ENV: &str = "MAC_NOTIFY_ALERTER_PATH";

/// Show one notification and print the user's answer
pub async fn run_send(options: SendOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    // Reject before installing anything
    if let Err(e) = options.notification.validate() {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    let resolver = create_resolver(options.alerter_path);
    let notifier = match Notifier::resolve(resolver.as_ref(), ProcessExecutor::new()).await {
        Ok(n) => n.with_default_timeout(options.timeout),
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    presenter.start_spinner("Waiting for a response...");
    let result = notifier.send(&options.notification).await;

    match result {
        Ok(response) => {
            presenter.stop_spinner();

            if options.json {
                match serde_json::to_string(&response) {
                    Ok(json) => presenter.output(&json),
                    Err(e) => {
                        presenter.error(&format!("Failed to encode response: {}", e));
                        return ExitCode::from(EXIT_ERROR);
                    }
                }
            } else {
                presenter.response(&response);
            }

            ExitCode::from(EXIT_SUCCESS)
        }
        Err(NotifyError::Validation(e)) => {
            presenter.stop_spinner();
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_USAGE_ERROR)
        }
        Err(e) => {
            presenter.spinner_fail("Notification failed");
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Extract the bundled alerter and print its path
pub async fn run_install(presenter: &Presenter) -> ExitCode {
    let alerter = EmbeddedAlerter::new();

    match alerter.install().await {
        Ok(path) => {
            presenter.output(&path.to_string_lossy());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            presenter.info(&format!(
                "Install alerter yourself and pass --alerter-path or set {}",
                ALERTER_PATH_ENV
            ));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Load and merge configuration from file and CLI.
///
/// The alerter path is picked separately by [`select_alerter_path`].
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load_or_empty().await;

    // Merge: defaults < file < cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Alerter path from the flag, then [`ALERTER_PATH_ENV`], then the config
/// file. Flag and env values are kept as raw paths, not re-encoded.
pub fn select_alerter_path(
    flag: Option<PathBuf>,
    env_value: Option<OsString>,
    config: &AppConfig,
) -> Option<PathBuf> {
    flag.filter(|p| !p.as_os_str().is_empty())
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
        .or_else(|| config.alerter_path())
}

/// [`select_alerter_path`] with the value of [`ALERTER_PATH_ENV`]
pub fn alerter_path_from_env(flag: Option<PathBuf>, config: &AppConfig) -> Option<PathBuf> {
    select_alerter_path(flag, env::var_os(ALERTER_PATH_ENV), config)
}
