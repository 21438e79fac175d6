//! `orgmd diff` — show the unified diff publish would apply.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use orgmd_publish::diff_published_output;

use super::JobArgs;

/// Arguments for `orgmd diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Print the diff without colors.
    #[arg(long)]
    pub no_color: bool,
}

impl DiffArgs {
    pub fn run(self, job_args: &JobArgs) -> Result<ExitCode> {
        if self.no_color {
            colored::control::set_override(false);
        }
        let prepared = job_args.prepare()?;
        let shown = prepared.output_display();

        let diff = diff_published_output(&prepared.converter, &prepared.job)
            .with_context(|| format!("diff failed for {shown}"))?;

        let Some(diff) = diff else {
            println!("No differences for {shown}.");
            return Ok(ExitCode::SUCCESS);
        };

        for line in diff.unified_diff.lines() {
            if line.starts_with("+++") || line.starts_with("---") {
                println!("{}", line.bold());
            } else if line.starts_with("@@") {
                println!("{}", line.cyan());
            } else if line.starts_with('+') {
                println!("{}", line.green());
            } else if line.starts_with('-') {
                println!("{}", line.red());
            } else {
                println!("{line}");
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}
