//! Flows module - Operations combining manifest, reader and extractors
//!
//! Provides:
//! - report: mine every manifest entry into the evidence report
//! - inspect: show how a single file or the manifest entries are mined

pub mod inspect;
pub mod report;
