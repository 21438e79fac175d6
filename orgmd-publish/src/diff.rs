//! Unified diff of what a publish run would change, for `orgmd diff`.

use std::path::PathBuf;

use similar::TextDiff;

use orgmd_convert::FormatConverter;

use crate::error::PublishError;
use crate::job::{read_published, PublishJob};

/// Difference between the published output and a fresh conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: PathBuf,
    pub unified_diff: String,
}

/// Convert the input and compare it to the current published output.
///
/// Returns `None` when the input is missing or the output is already current.
/// No files are written. A missing output diffs against empty content.
pub fn diff_published_output(
    converter: &dyn FormatConverter,
    job: &PublishJob,
) -> Result<Option<FileDiff>, PublishError> {
    let Some(rendered) = job.render(converter)? else {
        return Ok(None);
    };
    let existing = read_published(&job.output)?.unwrap_or_default();
    if existing == rendered.as_bytes() {
        return Ok(None);
    }
    let existing = String::from_utf8_lossy(&existing).into_owned();

    let name = job
        .output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| job.output.display().to_string());
    let old_header = format!("a/{name}");
    let new_header = format!("b/{name}");
    let unified = TextDiff::from_lines(existing.as_str(), rendered.as_str())
        .unified_diff()
        .header(&old_header, &new_header)
        .context_radius(3)
        .to_string();

    Ok(Some(FileDiff {
        path: job.output.clone(),
        unified_diff: unified,
    }))
}
