//! A single conversion job: where to read, where to publish, which formats.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use orgmd_convert::FormatConverter;
use orgmd_core::{MarkupFormat, ProjectConfig};

use crate::error::{io_err, PublishError};

/// Suffix appended to the output file name for the candidate output.
pub const CANDIDATE_SUFFIX: &str = ".orgmd.tmp";

/// Everything the driver needs to know about one input/output pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub from: MarkupFormat,
    pub to: MarkupFormat,
    /// Compare only; never write the candidate or the published output.
    pub dry_run: bool,
}

impl PublishJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            from: MarkupFormat::Org,
            to: MarkupFormat::Gfm,
            dry_run: false,
        }
    }

    /// Build a job from a loaded config, anchoring relative paths at `root`.
    pub fn from_config(config: &ProjectConfig, root: &Path) -> Self {
        let paths = config.resolve(root);
        Self {
            input: paths.input,
            output: paths.output,
            from: config.from.clone(),
            to: config.to.clone(),
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// `<output>.orgmd.tmp`, next to the output so the final rename stays on
    /// one filesystem.
    pub fn candidate_path(&self) -> PathBuf {
        let mut name = self.output.clone().into_os_string();
        name.push(CANDIDATE_SUFFIX);
        PathBuf::from(name)
    }

    /// Read and convert the input document.
    ///
    /// Returns `Ok(None)` when the input does not exist.
    pub(crate) fn render(
        &self,
        converter: &dyn FormatConverter,
    ) -> Result<Option<String>, PublishError> {
        let text = match std::fs::read_to_string(&self.input) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!("input missing, skipping: {}", self.input.display());
                return Ok(None);
            }
            Err(err) => return Err(io_err(&self.input, err)),
        };

        tracing::debug!(
            "converting {} ({} -> {}) with {}",
            self.input.display(),
            self.from,
            self.to,
            converter.name()
        );
        let converted = converter.convert(&text, &self.from, &self.to)?;
        Ok(Some(converted))
    }
}

/// Current bytes of the published output, or `None` if it does not exist.
pub(crate) fn read_published(path: &Path) -> Result<Option<Vec<u8>>, PublishError> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(io_err(path, err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_sits_next_to_output() {
        let job = PublishJob::new("docs/README.org", "docs/README.md");
        assert_eq!(job.candidate_path(), PathBuf::from("docs/README.md.orgmd.tmp"));
    }

    #[test]
    #[cfg(unix)]
    fn candidate_keeps_non_utf8_output_directory() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = Path::new(OsStr::from_bytes(b"d\xff"));
        let job = PublishJob::new(dir.join("in.org"), dir.join("out.md"));
        let candidate = job.candidate_path();
        assert_eq!(candidate.parent(), Some(dir));
        assert_eq!(
            candidate.file_name(),
            Some(OsStr::new("out.md.orgmd.tmp"))
        );
    }

    #[test]
    fn from_config_uses_configured_formats() {
        let config = ProjectConfig {
            to: MarkupFormat::CommonMark,
            ..ProjectConfig::default()
        };
        let job = PublishJob::from_config(&config, Path::new("repo"));
        assert_eq!(job.input, Path::new("repo").join("README.org"));
        assert_eq!(job.output, Path::new("repo").join("README.md"));
        assert_eq!(job.to, MarkupFormat::CommonMark);
        assert!(!job.dry_run);
    }
}
