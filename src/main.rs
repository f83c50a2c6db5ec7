//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `spoofx` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit status
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use spoofx::config::Opt;
use spoofx::initialization::init_logger_with;
use spoofx::{run_scan, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::from(Opt::parse());

    if config.no_color {
        colored::control::set_override(false);
    }

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the scan using the library
    match run_scan(config).await {
        // The presenter has already printed the run summary
        Ok(_report) => Ok(()),
        Err(e) => {
            eprintln!("spoofx error: {:#}", e);
            process::exit(1);
        }
    }
}
