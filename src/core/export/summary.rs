//! Export outcome and reporting
//!
//! This module defines the result of one export run.

use crate::domain::SvgSplitError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use uuid::Uuid;

/// Report of a completed export run
#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    /// Identifier of the run, also attached to its log records
    pub run_id: Uuid,

    /// Collection that was exported
    pub collection: String,

    /// Suffix appended to every file name
    pub suffix: String,

    /// Directory the files were written to
    pub destination: PathBuf,

    /// Written files in export order
    pub files: Vec<PathBuf>,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the last file was written
    pub finished_at: DateTime<Utc>,

    /// Wall-clock duration of the run
    #[serde(skip)]
    pub duration: Duration,
}

impl ExportReport {
    /// Number of files written
    pub fn count(&self) -> usize {
        self.files.len()
    }

    /// Message shown to the user on completion
    pub fn success_message(&self) -> String {
        format!("Successfully saved {} SVGs", self.count())
    }

    /// Log the report
    pub fn log_summary(&self) {
        tracing::info!(
            run_id = %self.run_id,
            collection = %self.collection,
            destination = %self.destination.display(),
            files = self.count(),
            duration_ms = self.duration.as_millis() as u64,
            "Export run completed"
        );
    }
}

/// Outcome of [`BatchExporter::run`](super::BatchExporter::run)
#[derive(Debug)]
pub enum ExportOutcome {
    /// Every member was exported
    Completed(ExportReport),
    /// The directory prompt was dismissed; nothing was written
    Cancelled,
    /// The run stopped at the first error. Files written before it remain.
    Failed(SvgSplitError),
}

impl ExportOutcome {
    /// Whether the run completed
    pub fn is_completed(&self) -> bool {
        matches!(self, ExportOutcome::Completed(_))
    }

    /// Number of files written by a completed run
    pub fn exported_count(&self) -> Option<usize> {
        match self {
            ExportOutcome::Completed(report) => Some(report.count()),
            _ => None,
        }
    }
}
