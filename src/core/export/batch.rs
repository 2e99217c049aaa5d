//! Batch export of a collection
//!
//! This module drives one export run: each member of the resolved collection
//! is isolated into its own document and written to its own file.

use crate::core::export::collection::CollectionResolver;
use crate::core::export::options::{ExportConfiguration, SVG_EXTENSION};
use crate::core::export::summary::{ExportOutcome, ExportReport};
use crate::core::export::target::FileTargetResolver;
use crate::document::{DirectoryPrompt, DocumentHandle};
use crate::domain::{Result, SvgSplitError};
use chrono::Utc;
use std::time::Instant;
use uuid::Uuid;

/// Title of the destination directory prompt
pub const DIRECTORY_PROMPT_TITLE: &str = "Select folder for SVG files.";

/// Exports every member of a collection into its own SVG file
pub struct BatchExporter {
    document: Option<DocumentHandle>,
    prompt: Box<dyn DirectoryPrompt>,
    configuration: ExportConfiguration,
}

impl BatchExporter {
    /// Create a new batch exporter
    ///
    /// `document` is the active document, `None` when nothing is open.
    pub fn new(
        document: Option<DocumentHandle>,
        prompt: Box<dyn DirectoryPrompt>,
        configuration: ExportConfiguration,
    ) -> Self {
        Self {
            document,
            prompt,
            configuration,
        }
    }

    /// Run the export
    ///
    /// This method:
    /// 1. Checks for an active document
    /// 2. Resolves the collection by exact name
    /// 3. Asks for the destination directory (dismissal cancels the run)
    /// 4. Builds the export options once
    /// 5. For each member, in stored order: forces it visible, isolates it,
    ///    resolves its output file, writes it, closes the isolated document
    ///
    /// The first error stops the run. Files written before it are kept and
    /// visibility changes on the source document are not reverted.
    pub fn run(&mut self, collection_name: &str, suffix: &str) -> ExportOutcome {
        match self.try_run(collection_name, suffix) {
            Ok(Some(report)) => ExportOutcome::Completed(report),
            Ok(None) => {
                tracing::info!("Directory selection cancelled, nothing exported");
                ExportOutcome::Cancelled
            }
            Err(e) => {
                crate::log_error_with_context!(&e, "Export run failed");
                ExportOutcome::Failed(e)
            }
        }
    }

    fn try_run(&mut self, collection_name: &str, suffix: &str) -> Result<Option<ExportReport>> {
        let document = self.document.clone().ok_or(SvgSplitError::NoDocument)?;
        let collection = CollectionResolver::new(document.clone()).resolve(collection_name)?;

        let Some(destination) = self.prompt.select_directory(DIRECTORY_PROMPT_TITLE) else {
            return Ok(None);
        };

        let options = self.configuration.build_options();
        let mut targets = FileTargetResolver::new(options.collision_policy);

        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("export_run", run_id = %run_id);
        let _entered = span.enter();

        let started_at = Utc::now();
        let start_time = Instant::now();
        crate::log_export_start!(collection_name, collection.len());

        let mut files = Vec::with_capacity(collection.len());
        for (index, element) in collection.members.iter().enumerate() {
            crate::log_element_progress!(index + 1, collection.len(), &element.name);

            document.borrow_mut().set_visible(element)?;
            let isolated = document.borrow().isolate(element)?;

            let target =
                targets.resolve_target(&element.name, suffix, SVG_EXTENSION, &destination)?;
            isolated.export_file(&target, &options)?;
            isolated.close();

            files.push(target);
        }

        let duration = start_time.elapsed();
        crate::log_export_complete!(files.len(), duration);

        let report = ExportReport {
            run_id,
            collection: collection.name,
            suffix: suffix.to_string(),
            destination,
            files,
            started_at,
            finished_at: Utc::now(),
            duration,
        };
        report.log_summary();
        Ok(Some(report))
    }
}
