// svgsplit - Export SVG collections as separate files
// Copyright (c) 2025 svgsplit Contributors
// Licensed under the MIT License

//! # svgsplit - Export SVG collections as separate files
//!
//! svgsplit takes a named group of an SVG document (a *collection*) and writes
//! every direct child group of it to its own standalone SVG file, named after
//! the element plus an optional suffix.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`shell`] - Prompts for the collection name and suffix, reports results
//! - [`core`] - The batch export pipeline
//! - [`document`] - SVG document model, isolation and serialization
//! - [`domain`] - Error and result types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use svgsplit::core::export::{BatchExporter, ExportConfiguration, ExportOutcome};
//! use svgsplit::document::{FixedDirectory, Workspace};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let workspace = Workspace::open("avatar.svg")?;
//! let mut exporter = BatchExporter::new(
//!     workspace.active_document(),
//!     Box::new(FixedDirectory("out".into())),
//!     ExportConfiguration::default(),
//! );
//!
//! if let ExportOutcome::Completed(report) = exporter.run("Traits", "-v2") {
//!     println!("{}", report.success_message());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Pipeline errors are [`domain::SvgSplitError`] values. They are turned into
//! user messages only by the interaction shell.

pub mod cli;
pub mod config;
pub mod core;
pub mod document;
pub mod domain;
pub mod logging;
pub mod shell;
