//! Renderer module
//!
//! Renders a FindingSet to jsonl, json or md for the inspection commands.

use crate::core::model::{FindingKind, FindingSet};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for finding sets
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a finding set to a string
    pub fn render(&self, findings: &FindingSet) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(findings),
            OutputFormat::Json => self.render_json(findings),
            OutputFormat::Markdown => self.render_markdown(findings),
        }
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, findings: &FindingSet) -> String {
        findings
            .items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, findings: &FindingSet) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&findings.items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&findings.items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown(&self, findings: &FindingSet) -> String {
        let mut output = String::new();
        let mut current_path: Option<&str> = None;

        for item in &findings.items {
            if current_path != Some(item.path.as_str()) {
                output.push_str(&format!("## {}\n\n", item.path));
                current_path = Some(item.path.as_str());
            }

            match item.kind {
                FindingKind::Section => {
                    let title = item.title.as_deref().unwrap_or("");
                    output.push_str(&format!("### {}", title));
                    if let Some(line) = item.line {
                        output.push_str(&format!(" (line {})", line));
                    }
                    output.push_str("\n\n");
                    if let Some(excerpt) = &item.excerpt {
                        output.push_str(excerpt);
                        output.push_str("\n\n");
                    }
                }
                FindingKind::Signal => {
                    let text = item.excerpt.as_deref().unwrap_or("");
                    match item.line {
                        Some(line) => output.push_str(&format!("- L{}: {}\n", line, text)),
                        None => output.push_str(&format!("- {}\n", text)),
                    }
                }
                FindingKind::Entry | FindingKind::Skipped => {
                    let label = item.classification.as_deref().unwrap_or("");
                    output.push_str(&format!("- {}\n", label));
                }
            }
        }

        output
    }
}
