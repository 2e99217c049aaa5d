//! Configuration management for svgsplit.
//!
//! Configuration is optional: without a file every export option has a
//! built-in default. A TOML file can override them.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use svgsplit::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("svgsplit.toml")?;
//! println!("Profile: {}", config.export.profile);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [export]
//! profile = "svg11"
//! embed_raster_images = true
//! collision_policy = "auto-suffix"
//!
//! [logging]
//! local_enabled = true
//! local_path = "${HOME}/.svgsplit/logs"
//! ```
//!
//! # Environment Variables
//!
//! `${VAR_NAME}` placeholders are substituted on load, and `SVGSPLIT_<SECTION>_<KEY>`
//! variables override individual settings:
//!
//! ```bash
//! export SVGSPLIT_EXPORT_PROFILE="svg-tiny12"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default, DEFAULT_CONFIG_FILE};
pub use schema::{ApplicationConfig, ExportConfig, LoggingConfig, SvgSplitConfig};
