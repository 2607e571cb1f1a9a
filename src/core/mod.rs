//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Run configuration and fixed vocabularies
//! - Fatal error types
//! - Manifest loading
//! - File reading with strict/lossy decoding
//! - The evidence model (records, extractions, report, findings)
//! - Rendering of findings for inspection commands
//! - Path normalization utilities

pub mod config;
pub mod error;
pub mod file_reader;
pub mod manifest;
pub mod model;
pub mod paths;
pub mod render;
