//! Path normalization utilities
//!
//! Manifest entries are kept as '/'-separated strings relative to the root.

use std::path::{Path, PathBuf};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    normalize_entry(&path.to_string_lossy())
}

/// Normalize a manifest entry string to use '/' as separator
pub fn normalize_entry(entry: &str) -> String {
    entry.replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Join a '/'-separated relative path onto a base
pub fn join_normalized(base: &Path, relative: &str) -> PathBuf {
    base.join(relative.replace('/', std::path::MAIN_SEPARATOR_STR))
}

/// Lowercase extension of a relative path, without the dot
pub fn extension_of(relative: &str) -> Option<String> {
    Path::new(relative)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Check whether any directory component of a relative path is excluded
pub fn is_under_excluded_dir(relative: &str, excluded: &[String]) -> bool {
    let mut segments: Vec<&str> = relative.split('/').collect();
    // The last segment is the file itself
    segments.pop();
    segments
        .iter()
        .any(|segment| excluded.iter().any(|dir| dir == segment))
}
