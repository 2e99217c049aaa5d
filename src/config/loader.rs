//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::SvgSplitConfig;
use crate::domain::errors::SvgSplitError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Configuration file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "svgsplit.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into SvgSplitConfig
/// 4. Applies environment variable overrides (SVGSPLIT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use svgsplit::config::loader::load_config;
///
/// let config = load_config("svgsplit.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<SvgSplitConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SvgSplitError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        SvgSplitError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: SvgSplitConfig = toml::from_str(&contents)
        .map_err(|e| SvgSplitError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finish(config)
}

/// Loads the configuration for a command-line invocation
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] is used
/// when present and built-in defaults otherwise. Environment overrides apply
/// in every case.
pub fn load_config_or_default(path: Option<&str>) -> Result<SvgSplitConfig> {
    match path {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => load_config(DEFAULT_CONFIG_FILE),
        None => finish(SvgSplitConfig::default()),
    }
}

fn finish(mut config: SvgSplitConfig) -> Result<SvgSplitConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        SvgSplitError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| SvgSplitError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        // Skip comment lines - don't process env vars in comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(SvgSplitError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using SVGSPLIT_* prefix
///
/// Environment variables follow the pattern: SVGSPLIT_<SECTION>_<KEY>
/// For example: SVGSPLIT_EXPORT_PROFILE, SVGSPLIT_LOGGING_LOCAL_PATH
fn apply_env_overrides(config: &mut SvgSplitConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("SVGSPLIT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Export overrides
    if let Ok(val) = std::env::var("SVGSPLIT_EXPORT_PROFILE") {
        config.export.profile = val.parse()?;
    }
    if let Ok(val) = std::env::var("SVGSPLIT_EXPORT_COLLISION_POLICY") {
        config.export.collision_policy = val.parse()?;
    }
    if let Ok(val) = std::env::var("SVGSPLIT_EXPORT_EMBED_RASTER_IMAGES") {
        config.export.embed_raster_images = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("SVGSPLIT_EXPORT_DOCTYPE") {
        config.export.doctype = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("SVGSPLIT_EXPORT_XML_DECLARATION") {
        config.export.xml_declaration = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("SVGSPLIT_EXPORT_PRETTY") {
        config.export.pretty = val.parse().unwrap_or(true);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("SVGSPLIT_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("SVGSPLIT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("SVGSPLIT_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
