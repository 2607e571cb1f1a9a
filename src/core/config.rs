//! Pipeline configuration
//!
//! All thresholds and vocabularies are fixed; only the three paths can be
//! overridden from the command line.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::core::model::FileFormat;

/// Default project root
pub const DEFAULT_ROOT: &str = ".";

/// Default manifest location (relative to root)
pub const DEFAULT_MANIFEST: &str = "docs/evidence/MANIFEST.txt";

/// Default report location (relative to root)
pub const DEFAULT_OUTPUT: &str = "docs/evidence/DECISION_EVIDENCE.md";

/// Line that introduces the path list in a manifest
pub const MANIFEST_MARKER: &str = "FILES:";

/// Maximum body lines kept per heading section
pub const MAX_SECTION_LINES: usize = 120;

/// Maximum signal lines kept per file
pub const MAX_SIGNAL_LINES: usize = 200;

/// Maximum unreadable paths listed in the summary
pub const MAX_UNREADABLE_LISTED: usize = 200;

/// Heading vocabulary; a section is kept when its lowercased title contains one
const HEADING_KEYWORDS: &[&str] = &[
    "decision",
    "decided",
    "agreed",
    "agreement",
    "consensus",
    "architecture",
    "architectural",
    "design",
    "rationale",
    "protocol",
    "migration",
    "security",
    "policy",
    "policies",
    "convention",
    "standard",
    "principle",
    "constraint",
    "requirement",
    "guideline",
    "rule",
    "trade-off",
    "tradeoff",
    "strategy",
];

/// Case-insensitive signal vocabulary for line-only files
const SIGNAL_PATTERN: &str = r"(?i)\b(decid(?:e|ed|es|ing)|decisions?|agreed|agree(?:ment|s)?|consensus|approved|must|shall|mandatory|required|requirement|never|always|forbidden|prohibited|not allowed|do not|don't|protocol|convention|policy|standardi[sz]ed)\b";

/// Affirmative and negative status markers
const STATUS_GLYPHS: &[&str] = &["\u{2705}", "\u{274C}"];

const STRUCTURED_EXTENSIONS: &[&str] = &["md", "markdown"];

const LINE_ONLY_EXTENSIONS: &[&str] = &[
    "txt", "rst", "adoc", "log", "csv", "json", "yaml", "yml", "toml", "ini", "cfg", "conf",
    "env", "js", "jsx", "mjs", "cjs", "ts", "tsx", "py", "rb", "go", "rs", "java", "sh", "ps1",
    "bat", "sql", "html", "css", "xml",
];

/// Directory names whose contents are never mined
const EXCLUDED_DIRS: &[&str] = &[".git", ".svn", ".hg", "node_modules", "vendor"];

/// Configuration for one evidence run
#[derive(Debug, Clone, Serialize)]
pub struct EvidenceConfig {
    /// Project root that manifest entries are relative to
    pub root: PathBuf,

    /// Manifest location (relative paths resolve against root)
    pub manifest: PathBuf,

    /// Report location (relative paths resolve against root)
    pub output: PathBuf,

    pub manifest_marker: String,

    pub heading_keywords: Vec<String>,

    pub signal_pattern: String,

    pub status_glyphs: Vec<String>,

    /// Lowercase extension (no dot) to format
    pub extensions: BTreeMap<String, FileFormat>,

    pub excluded_dirs: Vec<String>,

    pub max_section_lines: usize,

    pub max_signal_lines: usize,

    pub max_unreadable_listed: usize,
}

impl Default for EvidenceConfig {
    fn default() -> Self {
        let extensions = STRUCTURED_EXTENSIONS
            .iter()
            .map(|ext| (ext.to_string(), FileFormat::Structured))
            .chain(
                LINE_ONLY_EXTENSIONS
                    .iter()
                    .map(|ext| (ext.to_string(), FileFormat::LineOnly)),
            )
            .collect();

        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            output: PathBuf::from(DEFAULT_OUTPUT),
            manifest_marker: MANIFEST_MARKER.to_string(),
            heading_keywords: to_strings(HEADING_KEYWORDS),
            signal_pattern: SIGNAL_PATTERN.to_string(),
            status_glyphs: to_strings(STATUS_GLYPHS),
            extensions,
            excluded_dirs: to_strings(EXCLUDED_DIRS),
            max_section_lines: MAX_SECTION_LINES,
            max_signal_lines: MAX_SIGNAL_LINES,
            max_unreadable_listed: MAX_UNREADABLE_LISTED,
        }
    }
}

impl EvidenceConfig {
    /// Default configuration rooted at `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Override the manifest location
    pub fn with_manifest(mut self, manifest: impl Into<PathBuf>) -> Self {
        self.manifest = manifest.into();
        self
    }

    /// Override the report location
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Manifest path resolved against root
    pub fn manifest_path(&self) -> PathBuf {
        resolve(&self.root, &self.manifest)
    }

    /// Report path resolved against root
    pub fn output_path(&self) -> PathBuf {
        resolve(&self.root, &self.output)
    }

    /// Format for a lowercase extension, if it is mined at all
    pub fn format_for(&self, extension: &str) -> Option<FileFormat> {
        self.extensions.get(extension).copied()
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = EvidenceConfig::default();
        assert_eq!(config.manifest_marker, "FILES:");
        assert_eq!(config.max_section_lines, 120);
        assert_eq!(config.max_signal_lines, 200);
        assert_eq!(config.max_unreadable_listed, 200);
        assert!(config.excluded_dirs.contains(&"node_modules".to_string()));
        assert!(config.excluded_dirs.contains(&".git".to_string()));
    }

    #[test]
    fn test_format_table() {
        let config = EvidenceConfig::default();
        assert_eq!(config.format_for("md"), Some(FileFormat::Structured));
        assert_eq!(config.format_for("txt"), Some(FileFormat::LineOnly));
        assert_eq!(config.format_for("js"), Some(FileFormat::LineOnly));
        assert_eq!(config.format_for("png"), None);
    }

    #[test]
    fn test_paths_resolve_against_root() {
        let config = EvidenceConfig::with_root("/project")
            .with_manifest("lists/manifest.txt")
            .with_output("/tmp/out.md");

        assert_eq!(
            config.manifest_path(),
            PathBuf::from("/project/lists/manifest.txt")
        );
        assert_eq!(config.output_path(), PathBuf::from("/tmp/out.md"));
    }

    #[test]
    fn test_keywords_are_lowercase() {
        let config = EvidenceConfig::default();
        assert!(config
            .heading_keywords
            .iter()
            .all(|k| k == &k.to_lowercase()));
    }

    #[test]
    fn test_config_serializes() {
        let json = serde_json::to_value(EvidenceConfig::default()).unwrap();
        assert_eq!(json["extensions"]["md"], "structured");
        assert_eq!(json["extensions"]["txt"], "line-only");
    }
}
