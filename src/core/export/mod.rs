//! Export pipeline
//!
//! This module provides the export logic for svgsplit, including:
//! - Collection lookup ([`CollectionResolver`])
//! - Output naming and pre-flight checks ([`FileTargetResolver`])
//! - Export options ([`ExportConfiguration`])
//! - The batch run itself ([`BatchExporter`])
//! - Outcome and reporting ([`ExportOutcome`], [`ExportReport`])

pub mod batch;
pub mod collection;
pub mod options;
pub mod summary;
pub mod target;

pub use batch::BatchExporter;
pub use collection::CollectionResolver;
pub use options::{CollisionPolicy, ExportConfiguration, ExportOptions, SvgProfile};
pub use summary::{ExportOutcome, ExportReport};
pub use target::FileTargetResolver;
