//! Export command implementation
//!
//! This module implements the `export` command: it opens the document, then
//! hands over to the interaction shell.

use crate::config::SvgSplitConfig;
use crate::core::export::{BatchExporter, ExportConfiguration};
use crate::document::{DirectoryPrompt, FixedDirectory, Workspace};
use crate::shell::{InteractionShell, ShellInputs, ShellOutcome, StdConsole};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// SVG document to export from
    pub document: Option<PathBuf>,

    /// Name of the collection (group) to export; prompted for when omitted
    #[arg(short, long)]
    pub group: Option<String>,

    /// Suffix appended to every file name; prompted for when omitted
    #[arg(short, long, allow_hyphen_values = true)]
    pub suffix: Option<String>,

    /// Destination folder; prompted for when omitted
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Export without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, config: &SvgSplitConfig) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let workspace = match &self.document {
            Some(path) => match Workspace::open(path) {
                Ok(workspace) => workspace,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to open document");
                    eprintln!("{e}");
                    return Ok(e.exit_code());
                }
            },
            None => Workspace::empty(),
        };

        let prompt: Box<dyn DirectoryPrompt> = match &self.out_dir {
            Some(dir) => Box::new(FixedDirectory(dir.clone())),
            None => Box::new(StdConsole),
        };

        let mut exporter = BatchExporter::new(
            workspace.active_document(),
            prompt,
            ExportConfiguration::from_config(&config.export),
        );

        let mut shell = InteractionShell::new(StdConsole).with_inputs(ShellInputs {
            collection: self.group.clone(),
            suffix: self.suffix.clone(),
            confirmed: self.yes,
        });

        let outcome = shell.run(&mut exporter);
        tracing::debug!(outcome = ?outcome, "Shell closed");

        if outcome == ShellOutcome::Dismissed {
            println!("Export cancelled.");
        }
        Ok(outcome.exit_code())
    }
}
