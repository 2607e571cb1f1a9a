//! Manifest loading
//!
//! A manifest is free text with a marker line; every non-empty line after the
//! marker is a path relative to the project root:
//!
//! ```text
//! Historical files worth mining
//! FILES:
//! docs/architecture.md
//! [generated 2024-03-01]
//! backend/README.txt
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::core::error::{EvidenceError, Result};
use crate::core::file_reader::decode;
use crate::core::paths::normalize_entry;

/// Parse manifest text, returning `None` when the marker line is missing
pub fn parse_manifest(text: &str, marker: &str) -> Option<Vec<String>> {
    let mut lines = text.lines();
    lines.by_ref().find(|line| line.trim() == marker)?;

    let entries = lines
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('['))
        .map(normalize_entry)
        .collect();

    Some(entries)
}

/// Load and parse the manifest at `path`
pub fn load_manifest(path: &Path, marker: &str) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => EvidenceError::ManifestNotFound {
            path: path.to_path_buf(),
        },
        _ => EvidenceError::io(path, e),
    })?;

    let text = decode(bytes).into_text();

    parse_manifest(&text, marker).ok_or_else(|| EvidenceError::ManifestFormat {
        path: path.to_path_buf(),
        marker: marker.to_string(),
    })
}
