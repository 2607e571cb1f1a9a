//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::config::{EvidenceConfig, DEFAULT_MANIFEST, DEFAULT_OUTPUT, DEFAULT_ROOT};
use crate::core::render::{OutputFormat, RenderConfig};

/// decisio - mine project files for decision evidence.
#[derive(Parser, Debug)]
#[command(name = "decisio")]
#[command(
    author,
    version,
    about,
    long_about = r#"decisio reads a manifest of project files and writes one Markdown report of
the decisions, agreements and architectural statements found in them.

Markdown files contribute the sections whose headings match a fixed decision
vocabulary. Other text files contribute individual signal lines (must, never,
agreed, protocol, ...). Unreadable files are listed in the report summary.

The manifest is plain text. Every non-empty line after a `FILES:` marker line
is a path relative to ROOT; lines starting with `[` are annotations.

Examples:
    decisio
    decisio --root ../legacy --manifest lists/manifest.txt report
    decisio report --stdout
    decisio inspect docs/architecture.md --format md
    decisio manifest
"#
)]
pub struct Cli {
    /// Project root that manifest entries are relative to.
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_ROOT,
        value_name = "ROOT",
        long_help = "Project root (defaults to the current directory).\n\n\
Manifest entries, and relative --manifest/--output paths, are resolved against it."
    )]
    pub root: PathBuf,

    /// Manifest location.
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_MANIFEST,
        value_name = "PATH",
        long_help = "Manifest location, relative to ROOT unless absolute.\n\n\
The run fails before any file is read if the manifest is missing or has no\n\
`FILES:` marker line."
    )]
    pub manifest: PathBuf,

    /// Report location.
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_OUTPUT,
        value_name = "PATH",
        long_help = "Report location, relative to ROOT unless absolute.\n\n\
Parent directories are created. An existing report is overwritten."
    )]
    pub output: PathBuf,

    /// Output format for inspect/manifest (jsonl/json/md).
    #[arg(long, global = true, default_value = "jsonl", value_name = "FORMAT")]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Disable colored output (when applicable).
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (errors only).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Suppress the completion line and all log output except errors."
    )]
    pub quiet: bool,

    /// Verbose mode (per-file diagnostics).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Log each processed file to stderr. RUST_LOG, when set, takes precedence."
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mine every manifest entry and write the evidence report (default).
    #[command(
        long_about = "Read the manifest, mine each listed file in order and write the\n\
evidence report in a single step. A file that cannot be read is listed in the\n\
summary and does not stop the run.\n\n\
Examples:\n\
  decisio report\n\
  decisio report --stdout > /tmp/evidence.md\n"
    )]
    Report {
        /// Print the report to stdout instead of writing it.
        #[arg(long)]
        stdout: bool,
    },

    /// Show what a single file would contribute to the report.
    #[command(
        long_about = "Classify and mine one file, printing each section or signal line as an\n\
item with its source line number.\n\n\
Examples:\n\
  decisio inspect docs/adr/0003-auth.md\n\
  decisio inspect backend/NOTES.txt --format md\n"
    )]
    Inspect {
        /// File path (relative to ROOT unless absolute).
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// List manifest entries with their format classification.
    Manifest,

    /// Print the effective configuration as JSON.
    ShowConfig,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    // Get absolute root path
    let root = cli.root.canonicalize().unwrap_or(cli.root);
    let config = EvidenceConfig::with_root(root)
        .with_manifest(cli.manifest)
        .with_output(cli.output);

    match cli.command {
        None => crate::flows::report::run_report(&config, false, cli.quiet),

        Some(Commands::Report { stdout }) => {
            crate::flows::report::run_report(&config, stdout, cli.quiet)
        }

        Some(Commands::Inspect { file }) => {
            crate::flows::inspect::run_inspect(&config, &file, render_config)
        }

        Some(Commands::Manifest) => crate::flows::inspect::run_manifest(&config, render_config),

        Some(Commands::ShowConfig) => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_subcommand() {
        let cli = Cli::try_parse_from(["decisio"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(cli.manifest, PathBuf::from(DEFAULT_MANIFEST));
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["decisio", "report", "--stdout", "--root", "/tmp/p"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("/tmp/p"));
        assert!(matches!(cli.command, Some(Commands::Report { stdout: true })));
    }

    #[test]
    fn test_inspect_requires_file() {
        assert!(Cli::try_parse_from(["decisio", "inspect"]).is_err());
    }

    #[test]
    fn test_command_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
