//! Error types for orgmd-publish.

use std::path::PathBuf;

use thiserror::Error;

use orgmd_convert::ConvertError;

/// All errors that can arise while publishing.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The format converter failed; the published output was not touched.
    #[error("conversion failed: {0}")]
    Convert(#[from] ConvertError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`PublishError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> PublishError {
    PublishError::Io {
        path: path.into(),
        source,
    }
}
