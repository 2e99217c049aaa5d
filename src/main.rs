// svgsplit - Export SVG collections as separate files
// Copyright (c) 2025 svgsplit Contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use svgsplit::cli::{Cli, Commands};
use svgsplit::config::{load_config_or_default, SvgSplitConfig};
use svgsplit::logging::init_logging;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // init and validate-config report a broken configuration themselves
    let config = match load_config_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(_) if matches!(cli.command, Commands::Init(_) | Commands::ValidateConfig(_)) => {
            SvgSplitConfig::default()
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(e.exit_code());
        }
    };

    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.application.log_level);
    let guard = match init_logging(log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(e.exit_code());
        }
    };

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "svgsplit");

    let exit_code = match execute_command(&cli, &config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            4
        }
    };

    // process::exit skips destructors
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli, config: &SvgSplitConfig) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Export(args) => args.execute(config),
        Commands::List(args) => args.execute(),
        Commands::ValidateConfig(args) => args.execute(cli.config.as_deref()),
        Commands::Init(args) => args.execute(),
    }
}
