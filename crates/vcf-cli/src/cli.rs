//! CLI argument definitions for the vCard generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use vcf_model::VcardVersion;

#[derive(Parser)]
#[command(
    name = "vcfgen",
    version,
    about = "vCard Generator - Convert tabular contact data to vCard format",
    long_about = "Convert CSV/TSV contact tables to vCard (.vcf) files.\n\n\
                  Columns are assigned to vCard fields through a JSON mapping\n\
                  document; `vcfgen suggest` drafts one from the column headers."
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
    /// Convert a contact table to a vCard file.
    Convert(ConvertArgs),

    /// Draft a mapping document from a table's column headers.
    Suggest(SuggestArgs),

    /// List supported vCard field kinds and subtypes.
    Fields,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Path to the contact table (.csv or .tsv).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Mapping document assigning columns and constants to vCard fields.
    #[arg(long = "mapping", value_name = "FILE")]
    pub mapping: PathBuf,

    /// Output file (default: <INPUT> with a .vcf extension).
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// vCard format version to write (overrides --ios and the mapping file).
    #[arg(long = "vcard-version", value_enum)]
    pub vcard_version: Option<VersionArg>,

    /// Target iOS importers: shorthand for the legacy 2.1 format.
    #[arg(long = "ios")]
    pub ios: bool,

    /// Omit empty optional fields instead of emitting blank lines.
    #[arg(long = "skip-empty-fields")]
    pub skip_empty_fields: bool,

    /// Validate and render without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct SuggestArgs {
    /// Path to the contact table (.csv or .tsv).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Minimum confidence for a header suggestion to be kept.
    #[arg(long = "min-confidence", value_name = "SCORE",
          default_value_t = vcf_map::DEFAULT_MIN_CONFIDENCE)]
    pub min_confidence: f64,
}

/// CLI vCard version choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum VersionArg {
    #[value(name = "2.1")]
    V2_1,
    #[value(name = "3.0")]
    V3_0,
}

impl From<VersionArg> for VcardVersion {
    fn from(arg: VersionArg) -> Self {
        match arg {
            VersionArg::V2_1 => Self::V2_1,
            VersionArg::V3_0 => Self::V3_0,
        }
    }
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
