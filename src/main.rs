//! mac-notify CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use mac_notify::cli::{
    app::{
        alerter_path_from_env, load_merged_config, run_install, run_send, EXIT_ERROR,
        EXIT_SUCCESS, EXIT_USAGE_ERROR,
    },
    args::{Cli, Commands, SendOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use mac_notify::domain::alert::Timeout;
use mac_notify::domain::config::AppConfig;
use mac_notify::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout carries the response, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::from(EXIT_SUCCESS);
        }
        Some(Commands::Install) => return run_install(&presenter).await,
        None => {}
    }

    let cli_config = AppConfig {
        timeout: cli.timeout.clone(),
        close_label: cli.close_label.clone(),
        ..Default::default()
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    let timeout = match config.timeout.as_deref() {
        Some(s) => match s.parse::<Timeout>() {
            Ok(t) => t,
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        },
        None => config.timeout_or_default(),
    };

    let options = SendOptions {
        notification: cli.notification(config.close_label()),
        alerter_path: alerter_path_from_env(cli.alerter_path.clone(), &config),
        timeout,
        json: cli.json,
    };

    run_send(options).await
}
