//! orgmd — publish an org-mode document as Markdown, only when it changed.
//!
//! # Usage
//!
//! ```text
//! orgmd                               # same as `orgmd publish`
//! orgmd publish [--dry-run]
//! orgmd diff
//! orgmd check [--json]
//!
//! global: [--root DIR] [--input PATH] [--output PATH] [--from FMT] [--to FMT]
//!         [--converter PROG] [--converter-arg ARG]... [-v]...
//! ```

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{check::CheckArgs, diff::DiffArgs, publish::PublishArgs, JobArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "orgmd",
    version,
    about = "Convert README.org to README.md, rewriting the output only when it changes",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    job: JobArgs,

    /// Raise log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert the input and replace the output if the content changed (default).
    Publish(PublishArgs),

    /// Show a unified diff of what publish would change.
    Diff(DiffArgs),

    /// Exit non-zero when the published output is out of date.
    Check(CheckArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        None => PublishArgs::default().run(&cli.job),
        Some(Commands::Publish(args)) => args.run(&cli.job),
        Some(Commands::Diff(args)) => args.run(&cli.job),
        Some(Commands::Check(args)) => args.run(&cli.job),
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
