//! Freshness check for CI: is the committed output what a publish would write?

use serde::Serialize;

use orgmd_convert::FormatConverter;

use crate::error::PublishError;
use crate::job::{read_published, PublishJob};

/// Whether the published output matches a fresh conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Freshness {
    Fresh,
    Stale,
    MissingInput,
}

impl Freshness {
    pub fn as_str(self) -> &'static str {
        match self {
            Freshness::Fresh => "fresh",
            Freshness::Stale => "stale",
            Freshness::MissingInput => "missing-input",
        }
    }
}

/// Convert the input and compare with the published output. Writes nothing.
pub fn check_published_output(
    converter: &dyn FormatConverter,
    job: &PublishJob,
) -> Result<Freshness, PublishError> {
    let Some(rendered) = job.render(converter)? else {
        return Ok(Freshness::MissingInput);
    };
    let existing = read_published(&job.output)?;
    if existing.as_deref() == Some(rendered.as_bytes()) {
        Ok(Freshness::Fresh)
    } else {
        Ok(Freshness::Stale)
    }
}
