//! Evidence model
//!
//! Per-file records and extraction results produced by one pipeline pass, plus
//! the `Finding` item that `inspect` and `manifest` render.

use serde::{Deserialize, Serialize};

/// How a file's text is mined, resolved once from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileFormat {
    /// Markup with `#` headings; mined section by section
    Structured,
    /// Everything else; mined line by line
    LineOnly,
}

impl FileFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileFormat::Structured => "structured",
            FileFormat::LineOnly => "line-only",
        }
    }
}

/// Why a readable file was not mined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// Path lies under a version-control or vendored dependency directory
    Excluded,
    /// Extension is not in the format table
    Unsupported,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::Excluded => "excluded",
            SkipReason::Unsupported => "unsupported",
        }
    }
}

/// A heading whose title matched the decision vocabulary, with its body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSection {
    /// Whitespace-normalized heading title
    pub title: String,
    /// Body lines (capped), leading blank lines and trailing whitespace trimmed
    pub body: String,
    /// 1-based line of the heading
    pub line: u32,
}

/// A single line that matched the signal vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalLine {
    /// Right-trimmed source text
    pub text: String,
    /// 1-based source line
    pub line: u32,
}

/// What a processed file yielded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Skipped(SkipReason),
    Sections(Vec<ExtractedSection>),
    Signals(Vec<SignalLine>),
}

impl Extraction {
    /// True when nothing would be written for this file
    pub fn is_empty(&self) -> bool {
        match self {
            Extraction::Skipped(_) => true,
            Extraction::Sections(sections) => sections.is_empty(),
            Extraction::Signals(lines) => lines.is_empty(),
        }
    }

    pub fn item_count(&self) -> usize {
        match self {
            Extraction::Skipped(_) => 0,
            Extraction::Sections(sections) => sections.len(),
            Extraction::Signals(lines) => lines.len(),
        }
    }
}

/// The single outcome of one manifest entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Unreadable { reason: String },
    Binary,
    Processed(Extraction),
}

/// One manifest entry after reading and extraction
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Path relative to root, using '/' as separator
    pub path: String,
    pub outcome: FileOutcome,
}

/// Findings block for one source file in the report
#[derive(Debug, Clone)]
pub struct FileBlock {
    pub path: String,
    pub extraction: Extraction,
}

/// The assembled evidence report, serialized once
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Manifest location as shown in the metadata list
    pub manifest: String,
    /// Number of manifest entries
    pub files_listed: usize,
    pub blocks: Vec<FileBlock>,
    pub files_read: usize,
    /// Relative paths of unreadable entries, in manifest order
    pub unreadable: Vec<String>,
}

impl Report {
    pub fn new(manifest: impl Into<String>, files_listed: usize) -> Self {
        Self {
            manifest: manifest.into(),
            files_listed,
            ..Default::default()
        }
    }

    /// Account for one record, adding a block when it yielded anything
    pub fn push_record(&mut self, record: FileRecord) {
        match record.outcome {
            FileOutcome::Unreadable { .. } => self.unreadable.push(record.path),
            FileOutcome::Binary => self.files_read += 1,
            FileOutcome::Processed(extraction) => {
                self.files_read += 1;
                if !extraction.is_empty() {
                    self.blocks.push(FileBlock {
                        path: record.path,
                        extraction,
                    });
                }
            }
        }
    }

    pub fn blocks_written(&self) -> usize {
        self.blocks.len()
    }
}

/// The kind of a rendered finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    Section,
    Signal,
    Entry,
    Skipped,
}

/// One item emitted by `inspect` or `manifest`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,

    /// Path relative to root, using '/' as separator
    pub path: String,

    /// 1-based source line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,

    /// Section title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Section body or signal line text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Format classification or skip reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
}

impl Finding {
    pub fn section(path: impl Into<String>, section: &ExtractedSection) -> Self {
        Self {
            kind: FindingKind::Section,
            path: path.into(),
            line: Some(section.line),
            title: Some(section.title.clone()),
            excerpt: Some(section.body.clone()),
            classification: None,
        }
    }

    pub fn signal(path: impl Into<String>, signal: &SignalLine) -> Self {
        Self {
            kind: FindingKind::Signal,
            path: path.into(),
            line: Some(signal.line),
            title: None,
            excerpt: Some(signal.text.clone()),
            classification: None,
        }
    }

    pub fn entry(path: impl Into<String>, classification: impl Into<String>) -> Self {
        Self {
            kind: FindingKind::Entry,
            path: path.into(),
            line: None,
            title: None,
            excerpt: None,
            classification: Some(classification.into()),
        }
    }

    pub fn skipped(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            kind: FindingKind::Skipped,
            path: path.into(),
            line: None,
            title: None,
            excerpt: None,
            classification: Some(reason.into()),
        }
    }
}

/// Ordered collection of findings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FindingSet {
    pub items: Vec<Finding>,
}

impl FindingSet {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[allow(dead_code)]
    pub fn push(&mut self, item: Finding) {
        self.items.push(item);
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Finding> for FindingSet {
    fn from_iter<T: IntoIterator<Item = Finding>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, outcome: FileOutcome) -> FileRecord {
        FileRecord {
            path: path.to_string(),
            outcome,
        }
    }

    #[test]
    fn test_binary_counts_as_read_without_block() {
        let mut report = Report::new("MANIFEST.txt", 1);
        report.push_record(record("logo.txt", FileOutcome::Binary));

        assert_eq!(report.files_read, 1);
        assert_eq!(report.blocks_written(), 0);
        assert!(report.unreadable.is_empty());
    }

    #[test]
    fn test_unreadable_is_listed_not_read() {
        let mut report = Report::new("MANIFEST.txt", 1);
        report.push_record(record(
            "gone.md",
            FileOutcome::Unreadable {
                reason: "not found".to_string(),
            },
        ));

        assert_eq!(report.files_read, 0);
        assert_eq!(report.unreadable, vec!["gone.md".to_string()]);
    }

    #[test]
    fn test_empty_extraction_is_silent() {
        let mut report = Report::new("MANIFEST.txt", 2);
        report.push_record(record(
            "a.md",
            FileOutcome::Processed(Extraction::Sections(Vec::new())),
        ));
        report.push_record(record(
            "node_modules/x/README.md",
            FileOutcome::Processed(Extraction::Skipped(SkipReason::Excluded)),
        ));

        assert_eq!(report.files_read, 2);
        assert_eq!(report.blocks_written(), 0);
    }

    #[test]
    fn test_signal_extraction_adds_block() {
        let mut report = Report::new("MANIFEST.txt", 1);
        report.push_record(record(
            "notes.txt",
            FileOutcome::Processed(Extraction::Signals(vec![SignalLine {
                text: "We agreed on gRPC.".to_string(),
                line: 3,
            }])),
        ));

        assert_eq!(report.blocks_written(), 1);
        assert_eq!(report.blocks[0].path, "notes.txt");
        assert_eq!(report.blocks[0].extraction.item_count(), 1);
    }

    #[test]
    fn test_finding_serialization_skips_empty_fields() {
        let finding = Finding::entry("docs/adr.md", "structured");
        let json = serde_json::to_string(&finding).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"entry","path":"docs/adr.md","classification":"structured"}"#
        );
    }

    #[test]
    fn test_file_format_as_str() {
        assert_eq!(FileFormat::Structured.as_str(), "structured");
        assert_eq!(FileFormat::LineOnly.as_str(), "line-only");
    }
}
