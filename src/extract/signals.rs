//! Signal-line extraction for files without headings

use regex::Regex;

use crate::core::model::SignalLine;

/// Matches individual lines against the signal vocabulary and status glyphs
#[derive(Debug, Clone)]
pub struct SignalMatcher {
    pattern: Regex,
    glyphs: Vec<String>,
}

impl SignalMatcher {
    pub fn new(pattern: Regex, glyphs: Vec<String>) -> Self {
        Self { pattern, glyphs }
    }

    pub fn is_signal(&self, line: &str) -> bool {
        self.pattern.is_match(line) || self.glyphs.iter().any(|g| line.contains(g.as_str()))
    }

    /// First `max_lines` non-blank signal lines, in document order
    pub fn extract(&self, text: &str, max_lines: usize) -> Vec<SignalLine> {
        text.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter(|(_, line)| self.is_signal(line))
            .take(max_lines)
            .map(|(idx, line)| SignalLine {
                text: line.trim_end().to_string(),
                line: idx as u32 + 1,
            })
            .collect()
    }
}
