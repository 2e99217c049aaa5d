//! Output file naming and pre-flight checks
//!
//! File names are derived from element names:
//! 1. every whitespace run becomes a single `-`
//! 2. everything from the last `.` on is dropped
//! 3. the run suffix is appended verbatim
//! 4. the extension is appended

use crate::core::export::options::CollisionPolicy;
use crate::domain::{Result, SvgSplitError};
use regex::Regex;
use std::collections::HashSet;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

fn whitespace_runs() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Element name with whitespace collapsed and any extension removed
pub fn sanitize_stem(element_name: &str) -> String {
    let hyphenated = whitespace_runs().replace_all(element_name, "-");
    match hyphenated.rfind('.') {
        Some(dot) => hyphenated[..dot].to_string(),
        None => hyphenated.into_owned(),
    }
}

/// Final file name: `<sanitized stem><suffix><extension>`
pub fn compose_file_name(element_name: &str, suffix: &str, extension: &str) -> String {
    format!("{}{}{}", sanitize_stem(element_name), suffix, extension)
}

/// Resolves collision-checked, writable output paths for one run
#[derive(Debug)]
pub struct FileTargetResolver {
    policy: CollisionPolicy,
    produced: HashSet<PathBuf>,
}

impl FileTargetResolver {
    /// Create a resolver for a new run
    pub fn new(policy: CollisionPolicy) -> Self {
        Self {
            policy,
            produced: HashSet::new(),
        }
    }

    /// Resolve the output path for one element
    ///
    /// The file is created (or truncated) and closed again before returning so
    /// permission problems surface before the export write.
    ///
    /// # Errors
    ///
    /// - [`SvgSplitError::AccessDenied`] if the file cannot be opened for writing
    /// - [`SvgSplitError::DuplicateTarget`] under [`CollisionPolicy::Fail`] when
    ///   the path was already produced in this run
    pub fn resolve_target(
        &mut self,
        element_name: &str,
        suffix: &str,
        extension: &str,
        dest_dir: &Path,
    ) -> Result<PathBuf> {
        let mut path = dest_dir.join(compose_file_name(element_name, suffix, extension));

        if self.produced.contains(&path) {
            match self.policy {
                CollisionPolicy::Overwrite => {
                    tracing::warn!(
                        element = %element_name,
                        path = %path.display(),
                        "Output file already written in this run, overwriting"
                    );
                }
                CollisionPolicy::Fail => return Err(SvgSplitError::DuplicateTarget(path)),
                CollisionPolicy::AutoSuffix => {
                    let stem = format!("{}{}", sanitize_stem(element_name), suffix);
                    let mut counter = 2;
                    while self.produced.contains(&path) {
                        path = dest_dir.join(format!("{stem}-{counter}{extension}"));
                        counter += 1;
                    }
                    tracing::debug!(
                        element = %element_name,
                        path = %path.display(),
                        "Renamed colliding output file"
                    );
                }
            }
        }

        preflight(&path)?;
        self.produced.insert(path.clone());
        Ok(path)
    }
}

/// Open the file for writing and close it again
fn preflight(path: &Path) -> Result<()> {
    File::create(path)
        .map(drop)
        .map_err(|e| SvgSplitError::AccessDenied {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}
