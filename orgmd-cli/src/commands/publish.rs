//! `orgmd publish` — convert and replace the output only if it changed.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use orgmd_publish::{ensure_published_output, PublishOutcome};

use super::{display_path, JobArgs};

/// Arguments for `orgmd publish`.
#[derive(Args, Debug, Default)]
pub struct PublishArgs {
    /// Compare only; write nothing.
    #[arg(long)]
    pub dry_run: bool,
}

impl PublishArgs {
    pub fn run(self, job_args: &JobArgs) -> Result<ExitCode> {
        let prepared = job_args.prepare()?;
        let job = prepared.job.clone().with_dry_run(self.dry_run);
        let shown = prepared.output_display();

        let outcome = ensure_published_output(&prepared.converter, &job)
            .with_context(|| format!("failed to publish {shown}"))?;

        // Exactly one status line on stderr; stdout stays clean for pipelines.
        match outcome {
            PublishOutcome::Updated { .. } => eprintln!("Updating {shown}"),
            PublishOutcome::Unchanged { .. } => eprintln!("No changes in {shown}"),
            PublishOutcome::WouldUpdate { .. } => eprintln!("[dry-run] Would update {shown}"),
            PublishOutcome::Skipped { input } => {
                tracing::info!(
                    "no input at {}, nothing to publish",
                    display_path(&prepared.root, &input)
                );
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}
