//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::config::DEFAULT_CONFIG_FILE;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing svgsplit configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: svgsplit validate-config");
                println!("  3. Find a collection: svgsplit list drawing.svg");
                println!("  4. Run export: svgsplit export drawing.svg");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(4)
            }
        }
    }

    /// Generate the commented configuration template
    fn generate_config() -> String {
        r#"# svgsplit Configuration File
#
# Every setting is optional. Values may reference environment variables
# as ${VAR_NAME}; SVGSPLIT_* variables override the file.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "warn"

# ============================================================================
# Export Configuration
# ============================================================================
[export]
# SVG compatibility tier of the written files:
# svg10 | svg11 | svg-tiny11 | svg-tiny12 | svg-basic11
profile = "svg11"

# Inline linked PNG/JPEG/GIF images as data URIs
embed_raster_images = false

# Emit the DOCTYPE of the selected profile
doctype = false

# Emit <?xml version="1.0" encoding="UTF-8"?>
xml_declaration = true

# Indent the written markup
pretty = true

# Two members resolving to the same file name:
# - overwrite: the later member replaces the earlier file
# - fail: stop the run at the first collision
# - auto-suffix: write name-2.svg, name-3.svg, ...
collision_policy = "overwrite"

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Write JSON logs to files in addition to the console
local_enabled = false

# Directory for log files
local_path = "./logs"

# Log rotation (daily, hourly or never)
local_rotation = "daily"
"#
        .to_string()
    }
}
