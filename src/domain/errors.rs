//! Domain error types
//!
//! This module defines the error hierarchy for svgsplit.
//! All errors are domain-specific and don't expose third-party types.

use std::path::PathBuf;
use thiserror::Error;

/// Main svgsplit error type
///
/// Every fatal condition of an export run ends up here. The interaction shell
/// is the only place that turns these into user-facing messages.
#[derive(Debug, Error)]
pub enum SvgSplitError {
    /// No active document to export from
    #[error("There are no document open!")]
    NoDocument,

    /// The requested collection does not exist in the active document
    #[error("No group named '{0}' in the active document")]
    CollectionNotFound(String),

    /// The destination file could not be opened for writing
    #[error("Access is denied: {} ({reason})", path.display())]
    AccessDenied { path: PathBuf, reason: String },

    /// Two elements of one run resolved to the same output file
    #[error("Duplicate output file in this run: {}", .0.display())]
    DuplicateTarget(PathBuf),

    /// Document parsing or structure errors
    #[error("Document error: {0}")]
    Document(String),

    /// Failure while writing an exported file
    #[error("Export error: {0}")]
    Export(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SvgSplitError {
    /// Process exit code for this error
    ///
    /// - 2: configuration problems
    /// - 3: nothing to export (no document, unknown collection)
    /// - 4: failures during the export itself
    pub fn exit_code(&self) -> i32 {
        match self {
            SvgSplitError::Configuration(_) => 2,
            SvgSplitError::NoDocument | SvgSplitError::CollectionNotFound(_) => 3,
            _ => 4,
        }
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for SvgSplitError {
    fn from(err: serde_json::Error) -> Self {
        SvgSplitError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for SvgSplitError {
    fn from(err: toml::de::Error) -> Self {
        SvgSplitError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from quick-xml parse errors
impl From<quick_xml::Error> for SvgSplitError {
    fn from(err: quick_xml::Error) -> Self {
        SvgSplitError::Document(format!("XML parse error: {err}"))
    }
}
