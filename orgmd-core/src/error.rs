//! Error types for orgmd-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from loading or validating project configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure while reading the config file.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The configuration parsed but describes an unusable job.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
