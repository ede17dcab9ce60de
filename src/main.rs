use std::io;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use snaplink::config::Config;
use snaplink::interfaces::cli::{Cli, Command};
use snaplink::interfaces::tui;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e.user_message());
            return ExitCode::from(2);
        }
    };

    match cli.command {
        Some(Command::Shorten { url, copy }) => {
            init_cli_tracing(&config);
            match snaplink::interfaces::cli::run_shorten(&config, &url, copy) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    tracing::error!("{}", e);
                    eprintln!("{} {}", "error:".red().bold(), e.user_message());
                    ExitCode::FAILURE
                }
            }
        }
        Some(Command::Tui) | None => {
            // Keep the guard alive so buffered log lines are flushed on exit
            let _guard = init_tui_tracing(&config);
            match tui::run_tui(&config) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    tracing::error!("tui failed: {}", e);
                    eprintln!("{} {}", "error:".red().bold(), e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

/// CLI mode logs to stderr, filtered by SNAPLINK_LOG.
fn init_cli_tracing(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(io::stderr)
        .init();
}

/// TUI mode logs to a rotated file; writing to the tty would corrupt the
/// alternate screen.
fn init_tui_tracing(config: &Config) -> tracing_appender::non_blocking::WorkerGuard {
    let appender = tracing_appender::rolling::daily(&config.log_dir, "snaplink.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    guard
}

fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"))
}
