//! Config loading integration tests: defaults, overrides, and error messages.

use std::path::PathBuf;

use assert_fs::prelude::*;
use orgmd_core::{config, ConfigError, MarkupFormat, ProjectConfig};
use predicates::prelude::predicate;
use rstest::rstest;

// ---------------------------------------------------------------------------
// 1. Defaults
// ---------------------------------------------------------------------------

#[test]
fn missing_config_file_yields_defaults() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    let cfg = config::load_at(root.path()).expect("load");
    assert_eq!(cfg, ProjectConfig::default());
    root.child("orgmd.yaml").assert(predicate::path::missing());
}

#[test]
fn empty_config_file_yields_defaults() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    root.child("orgmd.yaml").write_str("\n").expect("write");
    let cfg = config::load_at(root.path()).expect("load");
    assert_eq!(cfg, ProjectConfig::default());
}

// ---------------------------------------------------------------------------
// 2. Overrides
// ---------------------------------------------------------------------------

#[test]
fn full_config_is_loaded() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    root.child("orgmd.yaml")
        .write_str(
            "input: docs/guide.org\n\
             output: dist/guide.md\n\
             from: org\n\
             to: commonmark\n\
             converter:\n  program: emacs-org-export\n  args: [\"--to\", \"{to}\"]\n",
        )
        .expect("write");

    let cfg = config::load_at(root.path()).expect("load");
    assert_eq!(cfg.input, PathBuf::from("docs/guide.org"));
    assert_eq!(cfg.output, PathBuf::from("dist/guide.md"));
    assert_eq!(cfg.to, MarkupFormat::CommonMark);
    assert_eq!(cfg.converter.program, "emacs-org-export");
    assert_eq!(cfg.converter.args, vec!["--to", "{to}"]);

    let resolved = cfg.resolve(root.path());
    assert_eq!(resolved.input, root.path().join("docs/guide.org"));
    assert_eq!(resolved.output, root.path().join("dist/guide.md"));
}

#[rstest]
#[case("gfm", MarkupFormat::Gfm)]
#[case("Markdown", MarkupFormat::Markdown)]
#[case("rst", MarkupFormat::Rst)]
#[case("asciidoc", MarkupFormat::Other("asciidoc".into()))]
fn target_format_names(#[case] raw: &str, #[case] expected: MarkupFormat) {
    let root = assert_fs::TempDir::new().expect("tempdir");
    root.child("orgmd.yaml")
        .write_str(&format!("to: {raw}\n"))
        .expect("write");
    let cfg = config::load_at(root.path()).expect("load");
    assert_eq!(cfg.to, expected);
}

// ---------------------------------------------------------------------------
// 3. Error messages
// ---------------------------------------------------------------------------

#[test]
fn corrupt_yaml_returns_parse_error_with_path() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    root.child("orgmd.yaml")
        .write_str(": : corrupt : yaml : !!!\n  - broken: [unclosed")
        .expect("write");

    let err = config::load_at(root.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("orgmd.yaml"), "got: {err}");
}

#[test]
fn wrong_type_returns_parse_error() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    root.child("orgmd.yaml")
        .write_str("converter: [1, 2, 3]\n")
        .expect("write");

    let err = config::load_at(root.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "got: {err}");
}

#[test]
fn same_input_and_output_loads_but_fails_validation() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    root.child("orgmd.yaml")
        .write_str("input: README.md\noutput: ./README.md\n")
        .expect("write");

    let mut cfg = config::load_at(root.path()).expect("load leaves validation to the caller");
    let err = cfg.validate(root.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "got: {err}");

    cfg.output = PathBuf::from("dist/README.md");
    cfg.validate(root.path()).expect("override fixes the clash");
}

#[test]
#[cfg(unix)]
fn symlinked_output_onto_input_is_invalid() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    root.child("README.org").write_str("* x\n").expect("write");
    std::os::unix::fs::symlink(
        root.path().join("README.org"),
        root.path().join("README.md"),
    )
    .expect("symlink");

    let err = ProjectConfig::default().validate(root.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "got: {err}");
}
