//! Dirsum CLI Binary
//!
//! Command-line interface for directory change detection.

use clap::error::ErrorKind;
use clap::Parser;
use dirsum::check::run_check;
use dirsum::cli::{self, Cli};
use dirsum::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    // A malformed invocation maps to the "regeneration required" signal
    // rather than clap's usage exit code.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                e.exit();
            }
            let _ = e.print();
            process::exit(cli::EXIT_REGENERATE);
        }
    };

    let logging_config = build_logging_config(&cli);

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(cli::EXIT_REGENERATE);
    }

    info!("Dirsum starting");

    match run_check(&cli.directory, &cli.state_file) {
        Ok(outcome) => {
            info!("Check completed");
            print!("{}", cli::render_outcome(&outcome));
            process::exit(cli::exit_code(&outcome));
        }
        Err(e) => {
            error!("Check failed: {}", e);
            let (message, code) = cli::map_error(&e);
            eprintln!("{}", message);
            process::exit(code);
        }
    }
}

/// Build logging configuration from CLI arguments and environment
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    // If --verbose is not set, disable logging
    if !cli.verbose {
        let mut config = LoggingConfig::default();
        config.level = "off".to_string();
        return config;
    }

    let mut config = LoggingConfig::default();

    // Override with CLI arguments (highest priority)
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
