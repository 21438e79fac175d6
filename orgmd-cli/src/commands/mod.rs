//! Subcommands and the job arguments they share.

pub mod check;
pub mod diff;
pub mod publish;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use orgmd_convert::CommandConverter;
use orgmd_core::{config, MarkupFormat};
use orgmd_publish::PublishJob;

/// Where to read, where to publish, and how to convert.
///
/// Values given here override `orgmd.yaml` in the root directory.
#[derive(Args, Debug, Clone)]
pub struct JobArgs {
    /// Project root holding `orgmd.yaml`; relative paths are resolved against it.
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Input document (default: README.org).
    #[arg(long, global = true)]
    pub input: Option<PathBuf>,

    /// Published output (default: README.md).
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    /// Source markup format (default: org).
    #[arg(long, global = true)]
    pub from: Option<MarkupFormat>,

    /// Target markup format (default: gfm).
    #[arg(long, global = true)]
    pub to: Option<MarkupFormat>,

    /// Converter program; reads the document on stdin, prints the result (default: pandoc).
    #[arg(long, global = true)]
    pub converter: Option<String>,

    /// Converter argument, repeatable; `{from}` and `{to}` are substituted.
    #[arg(long = "converter-arg", global = true, allow_hyphen_values = true)]
    pub converter_args: Vec<String>,
}

/// A job ready to run, with the converter it runs with.
pub struct Prepared {
    pub root: PathBuf,
    pub converter: CommandConverter,
    pub job: PublishJob,
}

impl Prepared {
    /// Output path relative to the root, for user-facing messages.
    pub fn output_display(&self) -> String {
        display_path(&self.root, &self.job.output)
    }
}

impl JobArgs {
    pub fn prepare(&self) -> Result<Prepared> {
        let mut cfg = config::load_at(&self.root).with_context(|| {
            format!(
                "failed to load {}",
                config::config_path_at(&self.root).display()
            )
        })?;

        if let Some(input) = &self.input {
            cfg.input = input.clone();
        }
        if let Some(output) = &self.output {
            cfg.output = output.clone();
        }
        if let Some(from) = &self.from {
            cfg.from = from.clone();
        }
        if let Some(to) = &self.to {
            cfg.to = to.clone();
        }
        if let Some(program) = &self.converter {
            cfg.converter.program = program.clone();
        }
        if !self.converter_args.is_empty() {
            cfg.converter.args = self.converter_args.clone();
        }
        cfg.validate(&self.root).context("invalid configuration")?;

        Ok(Prepared {
            root: self.root.clone(),
            converter: CommandConverter::from_config(&cfg.converter),
            job: PublishJob::from_config(&cfg, &self.root),
        })
    }
}

pub fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_path_strips_root() {
        let root = Path::new(".");
        assert_eq!(display_path(root, &root.join("README.md")), "README.md");
        assert_eq!(
            display_path(Path::new("repo"), Path::new("elsewhere/out.md")),
            "elsewhere/out.md"
        );
    }
}
