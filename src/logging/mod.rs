//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Human-readable console logs on stderr
//! - Configurable log levels
//! - JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use svgsplit::logging::init_logging;
//! use svgsplit::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of an export run
///
/// # Example
///
/// ```no_run
/// use svgsplit::log_export_start;
///
/// log_export_start!("Traits", 12);
/// ```
#[macro_export]
macro_rules! log_export_start {
    ($collection:expr, $members:expr) => {
        tracing::info!(
            collection = %$collection,
            members = $members,
            "Starting export"
        );
    };
}

/// Log the completion of an export run
///
/// # Example
///
/// ```no_run
/// use svgsplit::log_export_complete;
/// use std::time::Duration;
///
/// log_export_complete!(42, Duration::from_secs(10));
/// ```
#[macro_export]
macro_rules! log_export_complete {
    ($count:expr, $duration:expr) => {
        tracing::info!(
            count = $count,
            duration_ms = $duration.as_millis() as u64,
            "Export completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use svgsplit::log_error_with_context;
/// use svgsplit::domain::SvgSplitError;
///
/// let error = SvgSplitError::NoDocument;
/// log_error_with_context!(&error, "Export run failed");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

/// Log progress through the members of a collection
///
/// # Example
///
/// ```no_run
/// use svgsplit::log_element_progress;
///
/// log_element_progress!(3, 12, "Hat One");
/// ```
#[macro_export]
macro_rules! log_element_progress {
    ($current:expr, $total:expr, $element:expr) => {
        tracing::debug!(
            current = $current,
            total = $total,
            element = %$element,
            "Exporting element"
        );
    };
}
