//! orgmd core library — markup formats, project configuration, errors.
//!
//! - [`types`] — [`MarkupFormat`] and configuration structs
//! - [`error`] — [`ConfigError`]
//! - [`config`] — load / resolve / validate `orgmd.yaml`

pub mod config;
pub mod error;
pub mod types;

pub use error::ConfigError;
pub use types::{ConverterConfig, MarkupFormat, ProjectConfig, ResolvedPaths};
