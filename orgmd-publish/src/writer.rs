//! Change-gated atomic publisher.
//!
//! ## `ensure_published_output` — protocol
//!
//! 1. Input absent → `Skipped`, nothing touched.
//! 2. Convert the input (converter errors abort before any write).
//! 3. Write the candidate to `<output>.orgmd.tmp`.
//! 4. Byte-compare with the published output → `Unchanged`, candidate removed.
//! 5. Otherwise rename the candidate over the output (atomic on POSIX) → `Updated`.
//!
//! The candidate never outlives the call: it is either promoted by the rename
//! or removed, including on every error path after it was created.

use std::path::{Path, PathBuf};

use orgmd_convert::FormatConverter;

use crate::error::{io_err, PublishError};
use crate::job::{read_published, PublishJob};

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Outcome of a publish run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Published output was created or replaced.
    Updated { path: PathBuf },
    /// Converted content matches the published output byte for byte.
    Unchanged { path: PathBuf },
    /// The input document does not exist; nothing was done.
    Skipped { input: PathBuf },
    /// Dry-run: the published output *would* have been replaced.
    WouldUpdate { path: PathBuf },
}

// ---------------------------------------------------------------------------
// Candidate file
// ---------------------------------------------------------------------------

/// Candidate output on disk; removed on drop unless promoted.
struct CandidateFile {
    path: PathBuf,
    promoted: bool,
}

impl CandidateFile {
    fn create(path: &Path, content: &[u8]) -> Result<Self, PublishError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
        }
        // Construct the guard first so a partial write is cleaned up too.
        let candidate = Self {
            path: path.to_path_buf(),
            promoted: false,
        };
        std::fs::write(path, content).map_err(|e| io_err(path, e))?;
        Ok(candidate)
    }

    fn promote(mut self, target: &Path) -> Result<(), PublishError> {
        std::fs::rename(&self.path, target).map_err(|e| io_err(target, e))?;
        self.promoted = true;
        Ok(())
    }
}

impl Drop for CandidateFile {
    fn drop(&mut self) {
        if !self.promoted {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

// ---------------------------------------------------------------------------
// ensure_published_output
// ---------------------------------------------------------------------------

/// Convert `job.input` and publish it to `job.output` if the bytes changed.
///
/// Converter failures propagate as [`PublishError::Convert`] and leave the
/// published output untouched.
pub fn ensure_published_output(
    converter: &dyn FormatConverter,
    job: &PublishJob,
) -> Result<PublishOutcome, PublishError> {
    ensure_with_candidate(converter, job, &job.candidate_path())
}

fn ensure_with_candidate(
    converter: &dyn FormatConverter,
    job: &PublishJob,
    candidate_path: &Path,
) -> Result<PublishOutcome, PublishError> {
    let Some(converted) = job.render(converter)? else {
        return Ok(PublishOutcome::Skipped {
            input: job.input.clone(),
        });
    };
    let path = job.output.clone();

    if job.dry_run {
        let existing = read_published(&job.output)?;
        if existing.as_deref() == Some(converted.as_bytes()) {
            tracing::debug!("unchanged: {}", path.display());
            return Ok(PublishOutcome::Unchanged { path });
        }
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(PublishOutcome::WouldUpdate { path });
    }

    let candidate = CandidateFile::create(candidate_path, converted.as_bytes())?;

    let existing = read_published(&job.output)?;
    if existing.as_deref() == Some(converted.as_bytes()) {
        tracing::debug!("unchanged: {}", path.display());
        drop(candidate);
        return Ok(PublishOutcome::Unchanged { path });
    }

    candidate.promote(&job.output)?;
    tracing::info!("wrote: {}", path.display());
    Ok(PublishOutcome::Updated { path })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
