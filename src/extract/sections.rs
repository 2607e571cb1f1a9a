//! Heading-section extraction for Markdown documents
//!
//! Sections are delimited by adjacency in the flat list of headings: a body runs
//! from the line after its heading up to the next heading of any level.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::model::ExtractedSection;

/// ATX heading: 1-6 `#`, whitespace, then a title
pub static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{1,6}\s+(\S.*)$").expect("Invalid HEADING_RE regex"));

/// Collapse whitespace runs to single spaces and trim
pub fn normalize_title(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Check a normalized title against the vocabulary (case-insensitive substring)
pub fn title_matches(title: &str, keywords: &[String]) -> bool {
    let lower = title.to_lowercase();
    keywords.iter().any(|keyword| lower.contains(keyword.as_str()))
}

/// Drop blank lines before the first line of text
fn skip_leading_blank_lines(body: &str) -> &str {
    let mut rest = body;
    while let Some((first, tail)) = rest.split_once('\n') {
        if !first.trim().is_empty() {
            break;
        }
        rest = tail;
    }
    rest
}

/// Extract vocabulary-matching sections in document order
pub fn extract_sections(
    text: &str,
    keywords: &[String],
    max_lines: usize,
) -> Vec<ExtractedSection> {
    let lines: Vec<&str> = text.lines().collect();

    let mut headings: Vec<(usize, String)> = lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            HEADING_RE
                .captures(line)
                .map(|caps| (idx, normalize_title(&caps[1])))
        })
        .collect();

    if headings.is_empty() {
        return Vec::new();
    }

    // Sentinel so the last heading's body runs to end of file
    headings.push((lines.len(), String::new()));

    headings
        .windows(2)
        .filter(|pair| title_matches(&pair[0].1, keywords))
        .filter_map(|pair| {
            let (start, title) = &pair[0];
            let end = pair[1].0;

            let body = lines[start + 1..end]
                .iter()
                .take(max_lines)
                .copied()
                .collect::<Vec<_>>()
                .join("\n");
            let body = skip_leading_blank_lines(body.trim_end());

            if body.is_empty() {
                return None;
            }

            Some(ExtractedSection {
                title: title.clone(),
                body: body.to_string(),
                line: *start as u32 + 1,
            })
        })
        .collect()
}
