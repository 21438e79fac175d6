//! # orgmd-publish
//!
//! Change-gated publishing of a converted document.
//!
//! Call [`ensure_published_output`] to convert the input document and replace
//! the published output only when the converted bytes differ.
//! [`diff_published_output`] and [`check_published_output`] answer the same
//! question without touching the filesystem.

pub mod check;
pub mod diff;
pub mod error;
pub mod job;
pub mod writer;

pub use check::{check_published_output, Freshness};
pub use diff::{diff_published_output, FileDiff};
pub use error::PublishError;
pub use job::PublishJob;
pub use writer::{ensure_published_output, PublishOutcome};
