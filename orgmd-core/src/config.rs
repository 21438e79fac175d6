//! Project configuration file.
//!
//! # Storage layout
//!
//! ```text
//! <root>/
//!   orgmd.yaml    (optional — every key falls back to its default)
//!   README.org    (input document)
//!   README.md     (published output)
//! ```
//!
//! A missing `orgmd.yaml` is not an error: the tool runs with
//! [`ProjectConfig::default`], which is the usual build-pipeline setup.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::types::ProjectConfig;

/// Name of the configuration file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "orgmd.yaml";

/// `<root>/orgmd.yaml` — pure, no I/O.
pub fn config_path_at(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

/// Load the project configuration rooted at `root`.
///
/// Returns the default configuration when `orgmd.yaml` is absent and
/// `ConfigError::Parse` (with path + line context) if it is malformed.
///
/// The result is not validated; callers apply their overrides first and then
/// call [`ProjectConfig::validate`].
pub fn load_at(root: &Path) -> Result<ProjectConfig, ConfigError> {
    let path = config_path_at(root);
    if !path.exists() {
        return Ok(ProjectConfig::default());
    }
    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    // An empty file deserializes to `null`; treat it like a missing file.
    if contents.trim().is_empty() {
        return Ok(ProjectConfig::default());
    }
    serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
}

impl ProjectConfig {
    /// Reject configurations that cannot describe a single conversion job.
    ///
    /// Input and output are compared after resolving them against `root`, and
    /// again through the filesystem when both already exist, so no spelling
    /// of the same file lets the output overwrite the input.
    pub fn validate(&self, root: &Path) -> Result<(), ConfigError> {
        if self.input.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("input path must not be empty".into()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("output path must not be empty".into()));
        }
        let resolved = self.resolve(root);
        if same_file(&resolved.input, &resolved.output) {
            return Err(ConfigError::Invalid(format!(
                "input and output both point at {}",
                resolved.input.display()
            )));
        }
        if self.converter.program.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "converter program must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
