//! Inspection flows - Show how single files and manifest entries are mined
//!
//! Useful when curating a manifest: `inspect` prints what one file would
//! contribute, `manifest` prints how every entry would be classified.

use anyhow::Result;
use std::path::Path;

use crate::core::config::EvidenceConfig;
use crate::core::manifest::load_manifest;
use crate::core::model::{Extraction, FileOutcome, FileRecord, Finding, FindingSet};
use crate::core::paths::{make_relative, normalize_path};
use crate::core::render::{RenderConfig, Renderer};
use crate::extract::Extractor;
use crate::flows::report::process_entry;

/// Convert one file record into findings
pub fn record_findings(record: &FileRecord) -> FindingSet {
    let path = record.path.as_str();

    match &record.outcome {
        FileOutcome::Unreadable { reason } => {
            std::iter::once(Finding::skipped(path, format!("unreadable: {}", reason))).collect()
        }
        FileOutcome::Binary => std::iter::once(Finding::skipped(path, "binary")).collect(),
        FileOutcome::Processed(Extraction::Skipped(reason)) => {
            std::iter::once(Finding::skipped(path, reason.as_str())).collect()
        }
        FileOutcome::Processed(Extraction::Sections(sections)) => sections
            .iter()
            .map(|section| Finding::section(path, section))
            .collect(),
        FileOutcome::Processed(Extraction::Signals(lines)) => lines
            .iter()
            .map(|line| Finding::signal(path, line))
            .collect(),
    }
}

/// Mine a single file (relative to root unless absolute)
pub fn inspect_file(config: &EvidenceConfig, file: &Path) -> Result<FindingSet> {
    let relative = if file.is_absolute() {
        make_relative(file, &config.root).unwrap_or_else(|| normalize_path(file))
    } else {
        normalize_path(file)
    };

    let extractor = Extractor::new(config)?;
    let record = process_entry(&config.root, &extractor, &relative);
    Ok(record_findings(&record))
}

/// Classify every manifest entry without reading it
pub fn classify_manifest(config: &EvidenceConfig) -> Result<FindingSet> {
    let entries = load_manifest(&config.manifest_path(), &config.manifest_marker)?;
    let extractor = Extractor::new(config)?;

    Ok(entries
        .iter()
        .map(|entry| {
            let classification = match extractor.classify(entry) {
                Ok(format) => format.as_str(),
                Err(reason) => reason.as_str(),
            };
            Finding::entry(entry.as_str(), classification)
        })
        .collect())
}

/// Run the inspect command
pub fn run_inspect(config: &EvidenceConfig, file: &Path, render: RenderConfig) -> Result<()> {
    let findings = inspect_file(config, file)?;
    let renderer = Renderer::with_config(render);
    println!("{}", renderer.render(&findings));
    Ok(())
}

/// Run the manifest command
pub fn run_manifest(config: &EvidenceConfig, render: RenderConfig) -> Result<()> {
    let findings = classify_manifest(config)?;
    let renderer = Renderer::with_config(render);
    println!("{}", renderer.render(&findings));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::FindingKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_inspect_markdown_sections_with_lines() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("adr.md"),
            "# Context\nLegacy.\n\n## Decision\nAdopt Postgres.\n",
        )
        .unwrap();
        let config = EvidenceConfig::with_root(dir.path());

        let findings = inspect_file(&config, Path::new("adr.md")).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings.items[0].kind, FindingKind::Section);
        assert_eq!(findings.items[0].title.as_deref(), Some("Decision"));
        assert_eq!(findings.items[0].line, Some(4));
    }

    #[test]
    fn test_inspect_excerpt_has_no_leading_blank_lines() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("adr.md"),
            "## Decision\n\n\nAdopt Postgres.\n  Keep MySQL read replica.\n\n",
        )
        .unwrap();
        let config = EvidenceConfig::with_root(dir.path());

        let findings = inspect_file(&config, Path::new("adr.md")).unwrap();
        assert_eq!(
            findings.items[0].excerpt.as_deref(),
            Some("Adopt Postgres.\n  Keep MySQL read replica.")
        );
    }

    #[test]
    fn test_inspect_absolute_path_made_relative() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("ops")).unwrap();
        fs::write(dir.path().join("ops/runbook.txt"), "Never restart during backup.\n").unwrap();
        let config = EvidenceConfig::with_root(dir.path());

        let findings = inspect_file(&config, &dir.path().join("ops/runbook.txt")).unwrap();
        assert_eq!(findings.items[0].path, "ops/runbook.txt");
        assert_eq!(findings.items[0].kind, FindingKind::Signal);
    }

    #[test]
    fn test_inspect_missing_file_reports_unreadable() {
        let dir = TempDir::new().unwrap();
        let config = EvidenceConfig::with_root(dir.path());

        let findings = inspect_file(&config, Path::new("gone.txt")).unwrap();
        assert_eq!(findings.items[0].kind, FindingKind::Skipped);
        assert!(findings.items[0]
            .classification
            .as_deref()
            .unwrap()
            .starts_with("unreadable"));
    }

    #[test]
    fn test_classify_manifest() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("MANIFEST.txt"),
            "FILES:\ndocs/a.md\nnotes.txt\nvendor/x/y.md\nimage.png\n",
        )
        .unwrap();
        let config = EvidenceConfig::with_root(dir.path()).with_manifest("MANIFEST.txt");

        let findings = classify_manifest(&config).unwrap();
        let classes: Vec<&str> = findings
            .items
            .iter()
            .filter_map(|f| f.classification.as_deref())
            .collect();
        assert_eq!(
            classes,
            vec!["structured", "line-only", "excluded", "unsupported"]
        );
    }
}
