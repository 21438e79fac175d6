//! Subprocess-backed converter.
//!
//! The program is started with the configured args (`{from}` / `{to}`
//! substituted), receives the input document on stdin and must print the
//! converted document on stdout. A non-zero exit is a conversion failure;
//! whatever it printed on stderr is carried in the error.

use std::io::{self, Write};
use std::process::{Command, Output, Stdio};

use orgmd_core::types::{FROM_PLACEHOLDER, TO_PLACEHOLDER};
use orgmd_core::{ConverterConfig, MarkupFormat};

use crate::error::ConvertError;
use crate::FormatConverter;

/// Runs an external program as the format converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandConverter {
    program: String,
    args: Vec<String>,
}

impl CommandConverter {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &ConverterConfig) -> Self {
        Self::new(config.program.clone(), config.args.clone())
    }

    /// `pandoc --from {from} --to {to}`.
    pub fn pandoc() -> Self {
        Self::from_config(&ConverterConfig::default())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Args with the format placeholders filled in.
    pub fn expand_args(&self, from: &MarkupFormat, to: &MarkupFormat) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| {
                arg.replace(FROM_PLACEHOLDER, from.as_str())
                    .replace(TO_PLACEHOLDER, to.as_str())
            })
            .collect()
    }

    fn run(&self, text: &str, args: &[String]) -> Result<Output, ConvertError> {
        let mut child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ConvertError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let mut stdin = child.stdin.take().ok_or_else(|| ConvertError::Io {
            program: self.program.clone(),
            source: io::Error::other("converter stdin was not captured"),
        })?;

        // Feed stdin on a helper thread so a chatty converter cannot fill its
        // stdout pipe while we are still writing.
        let (output, fed) = std::thread::scope(|scope| {
            let feeder = scope.spawn(move || stdin.write_all(text.as_bytes()));
            let output = child.wait_with_output();
            let fed = feeder
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));
            (output, fed)
        });

        let output = output.map_err(|source| ConvertError::Io {
            program: self.program.clone(),
            source,
        })?;

        if !output.status.success() {
            return Ok(output);
        }

        // A converter may legitimately exit before draining stdin.
        match fed {
            Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(ConvertError::Io {
                program: self.program.clone(),
                source: e,
            }),
            _ => Ok(output),
        }
    }
}

impl FormatConverter for CommandConverter {
    fn convert(
        &self,
        text: &str,
        from: &MarkupFormat,
        to: &MarkupFormat,
    ) -> Result<String, ConvertError> {
        let args = self.expand_args(from, to);
        tracing::debug!(program = %self.program, ?args, "running converter");

        let output = self.run(text, &args)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::debug!(program = %self.program, status = %output.status, "converter failed");
            return Err(ConvertError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr,
            });
        }

        String::from_utf8(output.stdout).map_err(|_| ConvertError::InvalidUtf8 {
            program: self.program.clone(),
        })
    }

    fn name(&self) -> String {
        self.program.clone()
    }
}
