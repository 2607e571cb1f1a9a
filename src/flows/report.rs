//! Report flow - Mine every manifest entry into one evidence document
//!
//! Steps:
//! 1. Load the manifest (fatal if missing or without its marker)
//! 2. Read each entry in order; unreadable entries are recorded and skipped
//! 3. Mine readable, non-binary entries with the extractor for their format
//! 4. Render the report and write it in a single step

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use colored::Colorize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::core::config::EvidenceConfig;
use crate::core::error::EvidenceError;
use crate::core::file_reader::{read_text, ReadOutcome};
use crate::core::manifest::load_manifest;
use crate::core::model::{Extraction, FileOutcome, FileRecord, Report};
use crate::core::paths::{join_normalized, normalize_path};
use crate::extract::Extractor;

const REPORT_TITLE: &str = "Decision Evidence Report";

const REPORT_INTRO: &str = "This report collects decision, agreement and architecture evidence \
mined from the files listed in the manifest. Markdown files contribute the sections whose \
headings match the decision vocabulary; other text files contribute individual signal lines. \
Files with no findings are omitted.";

/// Read and mine one manifest entry
pub fn process_entry(root: &Path, extractor: &Extractor<'_>, entry: &str) -> FileRecord {
    let full_path = join_normalized(root, entry);

    let outcome = match read_text(&full_path) {
        ReadOutcome::Unreadable { reason } => {
            warn!(path = entry, %reason, "unreadable file");
            FileOutcome::Unreadable { reason }
        }
        ReadOutcome::Binary => {
            debug!(path = entry, "binary file skipped");
            FileOutcome::Binary
        }
        ReadOutcome::Text { content, lossy } => {
            let extraction = extractor.extract(entry, &content);
            debug!(
                path = entry,
                lossy,
                items = extraction.item_count(),
                "processed file"
            );
            FileOutcome::Processed(extraction)
        }
    };

    FileRecord {
        path: entry.to_string(),
        outcome,
    }
}

/// Run the whole pass and assemble the in-memory report
pub fn collect_evidence(config: &EvidenceConfig) -> std::result::Result<Report, EvidenceError> {
    let manifest_path = config.manifest_path();
    let entries = load_manifest(&manifest_path, &config.manifest_marker)?;
    let extractor = Extractor::new(config)?;

    info!(
        manifest = %manifest_path.display(),
        entries = entries.len(),
        "loaded manifest"
    );

    let mut report = Report::new(normalize_path(&config.manifest), entries.len());
    for entry in &entries {
        report.push_record(process_entry(&config.root, &extractor, entry));
    }

    Ok(report)
}

/// Render the report as Markdown
pub fn render_report(
    report: &Report,
    max_unreadable: usize,
    generated_at: DateTime<Utc>,
) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "# {} (generated {})\n\n",
        REPORT_TITLE,
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    ));
    output.push_str(REPORT_INTRO);
    output.push_str("\n\n");
    output.push_str(&format!("- Manifest: `{}`\n", report.manifest));
    output.push_str(&format!("- Files listed: {}\n\n", report.files_listed));

    for block in &report.blocks {
        output.push_str("---\n\n");
        output.push_str(&format!("## Source: {}\n\n", block.path));

        match &block.extraction {
            Extraction::Sections(sections) => {
                for section in sections {
                    output.push_str(&format!("### {}\n\n", section.title));
                    output.push_str(&section.body);
                    output.push_str("\n\n");
                }
            }
            Extraction::Signals(lines) => {
                output.push_str("### Signal lines\n\n");
                for line in lines {
                    output.push_str(&format!("- {}\n", line.text));
                }
                output.push('\n');
            }
            Extraction::Skipped(_) => {}
        }
    }

    output.push_str("---\n\n");
    output.push_str("## Extraction summary\n\n");
    output.push_str(&format!("- Files read successfully: {}\n", report.files_read));
    output.push_str(&format!("- Files unreadable: {}\n", report.unreadable.len()));
    output.push_str(&format!(
        "- Extraction blocks written: {}\n",
        report.blocks_written()
    ));

    if !report.unreadable.is_empty() {
        output.push_str("\n### Unreadable files\n\n");
        for path in report.unreadable.iter().take(max_unreadable) {
            output.push_str(&format!("- {}\n", path));
        }
    }

    output
}

/// Write the report in one step; the target is only replaced once fully written
pub fn write_report(path: &Path, content: &str) -> std::result::Result<(), EvidenceError> {
    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(|e| EvidenceError::io(parent, e))?;
            parent
        }
        None => Path::new("."),
    };

    // Dropping the staging file on any error path removes it
    let mut staging = NamedTempFile::new_in(parent).map_err(|e| EvidenceError::io(parent, e))?;
    staging
        .write_all(content.as_bytes())
        .and_then(|_| staging.as_file().sync_all())
        .map_err(|e| EvidenceError::io(staging.path(), e))?;
    staging.persist(path).map_err(|e| EvidenceError::io(path, e.error))?;

    Ok(())
}

/// Run the report flow
pub fn run_report(config: &EvidenceConfig, to_stdout: bool, quiet: bool) -> Result<()> {
    let report = collect_evidence(config)?;
    let rendered = render_report(&report, config.max_unreadable_listed, Utc::now());

    if to_stdout {
        print!("{}", rendered);
        return Ok(());
    }

    let output_path = config.output_path();
    write_report(&output_path, &rendered)
        .with_context(|| format!("Failed to write report to {:?}", output_path))?;

    info!(
        output = %output_path.display(),
        blocks = report.blocks_written(),
        "report written"
    );

    if !quiet {
        eprintln!(
            "{} {} ({} read, {} unreadable, {} blocks)",
            "Wrote".green().bold(),
            output_path.display(),
            report.files_read,
            report.unreadable.len(),
            report.blocks_written()
        );
    }

    Ok(())
}
