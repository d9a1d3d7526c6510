//! `AdView` CLI - Command-line host for the `AdView` ad screen
//!
//! Loads an ad configuration, drives the screen controller from command-line
//! arguments and renders the three regions as text or JSON.

mod cli;
mod commands;
mod error;
mod format;
mod util;

use adview_core::tracing::{TracingConfig, TracingLevel, TracingOutput, init_tracing};
use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    let level = if cli.quiet {
        TracingLevel::Error
    } else {
        TracingLevel::from_verbosity(cli.verbose)
    };
    let output = cli
        .log_file
        .clone()
        .map_or(TracingOutput::Stderr, |path| TracingOutput::File { path });
    let tracing_config = TracingConfig::new()
        .with_level(level)
        .with_output(output)
        .with_thread_ids(false);
    if let Err(e) = init_tracing(&tracing_config) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let result = commands::dispatch(config_path, cli.command);

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}
