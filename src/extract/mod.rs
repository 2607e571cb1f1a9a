//! Extract module - Per-file classification and mining
//!
//! Provides:
//! - sections: heading-based extraction for Markdown
//! - signals: line-based extraction for every other mined format
//!
//! A file is classified once from its path and routed to exactly one of them.

pub mod sections;
pub mod signals;

use regex::Regex;

use crate::core::config::EvidenceConfig;
use crate::core::error::{EvidenceError, Result};
use crate::core::model::{Extraction, FileFormat, SkipReason};
use crate::core::paths::{extension_of, is_under_excluded_dir};
use signals::SignalMatcher;

/// Classifies files and runs the matching extractor
#[derive(Debug, Clone)]
pub struct Extractor<'a> {
    config: &'a EvidenceConfig,
    signals: SignalMatcher,
}

impl<'a> Extractor<'a> {
    pub fn new(config: &'a EvidenceConfig) -> Result<Self> {
        let pattern = Regex::new(&config.signal_pattern).map_err(|source| {
            EvidenceError::InvalidSignalPattern {
                pattern: config.signal_pattern.clone(),
                source,
            }
        })?;

        Ok(Self {
            config,
            signals: SignalMatcher::new(pattern, config.status_glyphs.clone()),
        })
    }

    /// Resolve how a relative path is mined, or why it is not
    pub fn classify(&self, relative: &str) -> std::result::Result<FileFormat, SkipReason> {
        if is_under_excluded_dir(relative, &self.config.excluded_dirs) {
            return Err(SkipReason::Excluded);
        }

        extension_of(relative)
            .and_then(|ext| self.config.format_for(&ext))
            .ok_or(SkipReason::Unsupported)
    }

    /// Mine decoded text from `relative`
    pub fn extract(&self, relative: &str, text: &str) -> Extraction {
        match self.classify(relative) {
            Ok(FileFormat::Structured) => Extraction::Sections(sections::extract_sections(
                text,
                &self.config.heading_keywords,
                self.config.max_section_lines,
            )),
            Ok(FileFormat::LineOnly) => {
                Extraction::Signals(self.signals.extract(text, self.config.max_signal_lines))
            }
            Err(reason) => Extraction::Skipped(reason),
        }
    }
}
