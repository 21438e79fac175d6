//! `orgmd check` — fail when the published output is out of date.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use orgmd_publish::{check_published_output, Freshness};

use super::JobArgs;

/// Arguments for `orgmd check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    output: String,
    status: Freshness,
}

impl CheckArgs {
    pub fn run(self, job_args: &JobArgs) -> Result<ExitCode> {
        let prepared = job_args.prepare()?;
        let shown = prepared.output_display();

        let status = check_published_output(&prepared.converter, &prepared.job)
            .with_context(|| format!("check failed for {shown}"))?;

        if self.json {
            let report = CheckReport {
                output: shown,
                status,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            match status {
                Freshness::Fresh => println!("{} {shown} is up to date", "✓".green()),
                Freshness::Stale => {
                    println!("{} {shown} is out of date; run `orgmd`", "✗".red())
                }
                Freshness::MissingInput => {
                    println!("{} no input document, nothing to check", "·".dimmed())
                }
            }
        }

        Ok(match status {
            Freshness::Stale => ExitCode::FAILURE,
            Freshness::Fresh | Freshness::MissingInput => ExitCode::SUCCESS,
        })
    }
}
