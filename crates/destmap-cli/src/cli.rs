//! CLI argument definitions for the destination mapper.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "destmap",
    version,
    about = "Destination Mapping Tool - resolve Destination values to countries",
    long_about = "Enrich a CSV dataset by mapping its 'Destination' column to countries.\n\n\
                  Each destination is looked up in a city-to-country table first, then an\n\
                  airport (IATA) table, and passes through unchanged when neither matches.\n\
                  The augmented dataset is written as <stem>_updated_dest.<ext> in the\n\
                  output directory."
)]
pub struct Cli {
    /// Source CSV containing the 'Destination' column.
    #[arg(value_name = "DATA_CSV")]
    pub data: PathBuf,

    /// City-to-country mapping CSV (must contain 'name' and 'Country' columns).
    #[arg(long = "city-map", value_name = "PATH")]
    pub city_map: PathBuf,

    /// Airport-to-country mapping CSV (must contain 'IATA' and 'Country' columns).
    #[arg(long = "airport-map", value_name = "PATH")]
    pub airport_map: PathBuf,

    /// Directory for the output file (created if missing).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
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
