//! CLI argument definitions for `fora-hm`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "fora-hm",
    version,
    about = "Convert iFORA HM CSV exports into InfluxDB line protocol",
    long_about = "Convert the CSV history exported by the iFORA HM app into\n\
                  canonical blood measurements and InfluxDB line protocol.\n\
                  Hemoglobin is derived from hematocrit readings on the way."
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
    /// Convert an export to line protocol.
    Convert(ConvertArgs),

    /// Print the parsed records and their measurements.
    Show(ShowArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Path to the exported CSV file.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Write line protocol to a file instead of stdout.
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Emit zero readings instead of treating them as absent.
    #[arg(long = "include-empty")]
    pub include_empty: bool,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Path to the exported CSV file.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Show at most this many records.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Emit zero readings instead of treating them as absent.
    #[arg(long = "include-empty")]
    pub include_empty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
