//! CLI argument definitions for the dataprep importer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dataprep",
    version,
    about = "Import, clean, and validate tabular unit inventories",
    long_about = "Import tabular unit-inventory files (CSV), map their columns to the\n\
                  canonical schema, replay recorded transformations and cleanup\n\
                  actions, and validate the result before committing an import."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the canonical schema fields and their detection patterns.
    Fields,

    /// Infer a column mapping for a CSV file and report completeness.
    Map(MapArgs),

    /// Run the full import pipeline over a CSV file.
    Import(ImportArgs),
}

#[derive(Parser)]
pub struct MapArgs {
    /// Path to the CSV file to map.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Path to the CSV file to import.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Preset JSON with a recorded mapping, transformations, and cleanup.
    #[arg(long = "preset", value_name = "PATH")]
    pub preset: Option<PathBuf>,

    /// Where to write the cleaned dataset (default: <FILE>_clean.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Validate and report without writing the cleaned dataset.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Exit non-zero when validation issues remain after the pipeline runs.
    #[arg(long = "fail-on-issues")]
    pub fail_on_issues: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
