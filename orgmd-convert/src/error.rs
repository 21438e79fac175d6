//! Error types for orgmd-convert.

use std::process::ExitStatus;

use thiserror::Error;

/// All errors a format converter can report.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The converter program could not be started (not installed, not executable).
    #[error("failed to run converter `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O failure while exchanging data with a running converter.
    #[error("I/O error talking to converter `{program}`: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The converter ran and exited unsuccessfully.
    #[error("converter `{program}` failed ({status}){}", stderr_suffix(.stderr))]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    /// The converter printed something that is not UTF-8 text.
    #[error("converter `{program}` produced output that is not valid UTF-8")]
    InvalidUtf8 { program: String },

    /// An in-process converter refused the input.
    ///
    /// [`CommandConverter`](crate::CommandConverter) never returns this; it is
    /// the error for embedders that implement
    /// [`FormatConverter`](crate::FormatConverter) directly or pass a closure.
    #[error("conversion rejected: {0}")]
    Rejected(String),
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}
