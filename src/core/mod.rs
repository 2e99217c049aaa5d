//! Core business logic for svgsplit.
//!
//! # Export Workflow
//!
//! 1. **Resolve**: find the named collection in the active document
//! 2. **Choose**: ask for the destination directory
//! 3. **Isolate**: copy each member into its own transient document
//! 4. **Write**: export it under a name derived from the member name
//! 5. **Report**: return the number of files written
//!
//! # Example
//!
//! ```rust,no_run
//! use svgsplit::core::export::{BatchExporter, ExportConfiguration, ExportOutcome};
//! use svgsplit::document::{FixedDirectory, Workspace};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
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

pub mod export;
