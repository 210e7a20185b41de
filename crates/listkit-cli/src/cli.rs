//! CLI argument definitions for listkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use listkit_ingest::MAX_CONTACT_FILE_SIZE;
use listkit_model::DEFAULT_PREVIEW_LIMIT;

#[derive(Parser)]
#[command(
    name = "listkit",
    version,
    about = "Preview contact list imports",
    long_about = "Preview contact list imports before uploading them.\n\n\
                  Reads CSV, XLS, and XLSX files, maps header synonyms onto contact\n\
                  fields, and reports which rows carry a usable email address."
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

    /// Allow contact values (emails, names) to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a contact file and report usable contacts and row errors.
    Parse(ParseArgs),

    /// List the recognized header synonyms.
    Aliases,
}

#[derive(Parser)]
pub struct ParseArgs {
    /// Contact file (.csv, .xls, or .xlsx).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of contacts shown in the preview table.
    #[arg(long = "preview", value_name = "N", default_value_t = DEFAULT_PREVIEW_LIMIT)]
    pub preview: usize,

    /// Show every row error instead of the first few.
    #[arg(long = "all-errors")]
    pub all_errors: bool,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,

    /// Reject files larger than this many bytes.
    #[arg(long = "max-file-size", value_name = "BYTES", default_value_t = MAX_CONTACT_FILE_SIZE)]
    pub max_file_size: u64,

    /// Render this template for each previewed contact.
    ///
    /// Supports {FirstName}, {LastName} and {Email} placeholders.
    #[arg(long = "template", value_name = "TEXT")]
    pub template: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
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
