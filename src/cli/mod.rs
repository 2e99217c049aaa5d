//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for svgsplit using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// svgsplit - export the groups of an SVG collection as separate SVG files
#[derive(Parser, Debug)]
#[command(name = "svgsplit")]
#[command(version, about, long_about = None)]
#[command(author = "svgsplit Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults to ./svgsplit.toml when present)
    #[arg(short, long, env = "SVGSPLIT_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SVGSPLIT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export every group of a collection into its own SVG file
    Export(commands::export::ExportArgs),

    /// List the groups of a document that can be exported as collections
    List(commands::list::ListArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
