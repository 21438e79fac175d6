//! Shared types for orgmd: markup formats and the project configuration.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.
//! All types are serializable/deserializable via serde + serde_yaml.

use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Markup formats
// ---------------------------------------------------------------------------

/// A markup dialect understood by a format converter.
///
/// `Display` yields the name handed to the converter (`org`, `gfm`, ...).
/// Unknown names are carried through verbatim as [`MarkupFormat::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MarkupFormat {
    Org,
    Markdown,
    Gfm,
    CommonMark,
    Rst,
    Html,
    Other(String),
}

impl MarkupFormat {
    /// Converter-facing name of the format.
    pub fn as_str(&self) -> &str {
        match self {
            MarkupFormat::Org => "org",
            MarkupFormat::Markdown => "markdown",
            MarkupFormat::Gfm => "gfm",
            MarkupFormat::CommonMark => "commonmark",
            MarkupFormat::Rst => "rst",
            MarkupFormat::Html => "html",
            MarkupFormat::Other(name) => name,
        }
    }
}

impl fmt::Display for MarkupFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarkupFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("markup format must not be empty".to_string());
        }
        Ok(match trimmed.to_ascii_lowercase().as_str() {
            "org" | "org-mode" | "orgmode" => MarkupFormat::Org,
            "markdown" | "md" => MarkupFormat::Markdown,
            "gfm" => MarkupFormat::Gfm,
            "commonmark" => MarkupFormat::CommonMark,
            "rst" | "restructuredtext" => MarkupFormat::Rst,
            "html" => MarkupFormat::Html,
            _ => MarkupFormat::Other(trimmed.to_string()),
        })
    }
}

impl TryFrom<String> for MarkupFormat {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MarkupFormat> for String {
    fn from(format: MarkupFormat) -> Self {
        format.as_str().to_string()
    }
}

// ---------------------------------------------------------------------------
// Converter configuration
// ---------------------------------------------------------------------------

/// Placeholder replaced with the source format name in converter args.
pub const FROM_PLACEHOLDER: &str = "{from}";
/// Placeholder replaced with the target format name in converter args.
pub const TO_PLACEHOLDER: &str = "{to}";

/// External program used to translate the input document.
///
/// The program receives the input text on stdin and must print the converted
/// text on stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            program: "pandoc".to_string(),
            args: vec![
                "--from".to_string(),
                FROM_PLACEHOLDER.to_string(),
                "--to".to_string(),
                TO_PLACEHOLDER.to_string(),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Project configuration
// ---------------------------------------------------------------------------

/// Contents of `orgmd.yaml`. Every field falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Input document, relative to the project root unless absolute.
    pub input: PathBuf,
    /// Published output, relative to the project root unless absolute.
    pub output: PathBuf,
    pub from: MarkupFormat,
    pub to: MarkupFormat,
    pub converter: ConverterConfig,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("README.org"),
            output: PathBuf::from("README.md"),
            from: MarkupFormat::Org,
            to: MarkupFormat::Gfm,
            converter: ConverterConfig::default(),
        }
    }
}

/// Input and output paths anchored at a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ProjectConfig {
    /// Join relative input/output paths onto `root`. Absolute paths are kept.
    ///
    /// Both results are lexically normalized, so `README.md` and
    /// `./README.md` resolve to the same path.
    pub fn resolve(&self, root: &Path) -> ResolvedPaths {
        ResolvedPaths {
            input: anchor(root, &self.input),
            output: anchor(root, &self.output),
        }
    }
}

fn anchor(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&root.join(path))
    }
}

/// Drop `.` components and fold `..` into the preceding name. No I/O, so
/// symlinks are not resolved.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() && !path.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_display_uses_converter_names() {
        assert_eq!(MarkupFormat::Org.to_string(), "org");
        assert_eq!(MarkupFormat::Gfm.to_string(), "gfm");
        assert_eq!(MarkupFormat::Other("asciidoc".into()).to_string(), "asciidoc");
    }

    #[test]
    fn format_parse_is_case_insensitive_and_keeps_unknown_names() {
        assert_eq!("ORG".parse::<MarkupFormat>().unwrap(), MarkupFormat::Org);
        assert_eq!("md".parse::<MarkupFormat>().unwrap(), MarkupFormat::Markdown);
        assert_eq!(
            "Textile".parse::<MarkupFormat>().unwrap(),
            MarkupFormat::Other("Textile".into())
        );
        assert!("  ".parse::<MarkupFormat>().is_err());
    }

    #[test]
    fn default_config_targets_readme() {
        let cfg = ProjectConfig::default();
        assert_eq!(cfg.input, PathBuf::from("README.org"));
        assert_eq!(cfg.output, PathBuf::from("README.md"));
        assert_eq!(cfg.from, MarkupFormat::Org);
        assert_eq!(cfg.to, MarkupFormat::Gfm);
        assert_eq!(cfg.converter.program, "pandoc");
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = ProjectConfig::default();
        let yaml = serde_yaml::to_string(&cfg).expect("serialize");
        assert!(yaml.contains("from: org"));
        let back: ProjectConfig = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(back, cfg);
    }

    #[test]
    #[cfg(unix)]
    fn resolve_keeps_absolute_paths() {
        let cfg = ProjectConfig {
            output: PathBuf::from("/srv/docs/index.md"),
            ..ProjectConfig::default()
        };
        let resolved = cfg.resolve(Path::new("/repo"));
        assert_eq!(resolved.input, PathBuf::from("/repo/README.org"));
        assert_eq!(resolved.output, PathBuf::from("/srv/docs/index.md"));
    }

    #[test]
    fn normalize_folds_dot_components() {
        assert_eq!(normalize(Path::new("./README.md")), PathBuf::from("README.md"));
        assert_eq!(normalize(Path::new("docs/../README.md")), PathBuf::from("README.md"));
        assert_eq!(normalize(Path::new("../x/./y")), PathBuf::from("../x/y"));
        assert_eq!(normalize(Path::new("..")), PathBuf::from(".."));
        assert_eq!(normalize(Path::new(".")), PathBuf::from("."));
    }

    #[test]
    #[cfg(unix)]
    fn normalize_stops_at_filesystem_root() {
        assert_eq!(normalize(Path::new("/../etc/./hosts")), PathBuf::from("/etc/hosts"));
    }

    #[test]
    fn resolve_treats_dot_slash_spelling_as_same_file() {
        let cfg = ProjectConfig {
            input: PathBuf::from("README.md"),
            output: PathBuf::from("./README.md"),
            ..ProjectConfig::default()
        };
        let resolved = cfg.resolve(Path::new("repo"));
        assert_eq!(resolved.input, resolved.output);
    }
}
