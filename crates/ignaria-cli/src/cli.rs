//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ignaria - Anthology sections and metadata checks for the Ignaria corpus.
#[derive(Debug, Parser)]
#[command(name = "ignaria")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Root directory of the corpus
    #[arg(long, global = true, env = "IGNARIA_CORPUS_ROOT", default_value = ".")]
    pub corpus_root: PathBuf,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (status lines only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Preview candidate section headings and author guesses
    Scan(ScanArgs),

    /// Detect sections and write them into metadata records
    Extract(ExtractArgs),

    /// Apply a curated sections file
    Apply(ApplyArgs),

    /// Check temporal metadata of anthology sections
    Temporal(ReportArgs),

    /// Check corpus integrity (manifest, texts, metadata)
    Validate(ReportArgs),
}

/// Arguments for the scan command.
#[derive(Debug, Parser)]
pub struct ScanArgs {
    /// Volume identifiers (defaults to the configured anthology list)
    pub volumes: Vec<String>,

    /// Maximum candidates shown per volume
    #[arg(short, long, default_value = "30")]
    pub limit: usize,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Volume identifiers (defaults to the configured anthology list)
    pub volumes: Vec<String>,

    /// Build sections without writing records
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the apply command.
#[derive(Debug, Parser)]
pub struct ApplyArgs {
    /// YAML file listing curated sections per volume
    pub file: PathBuf,
}

/// Arguments for the validation commands.
#[derive(Debug, Parser)]
pub struct ReportArgs {
    /// Save the report to a YAML file
    #[arg(short, long)]
    pub report: Option<PathBuf>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
