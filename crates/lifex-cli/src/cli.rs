//! CLI argument definitions for the life-expectancy cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use lifex_model::Region;

#[derive(Parser)]
#[command(
    name = "lifex",
    version,
    about = "Clean Eurostat life-expectancy extracts",
    long_about = "Reshape a wide Eurostat life-expectancy extract into long format,\n\
                  coerce noisy values, and write the observations for one region.\n\n\
                  Supports tab-separated, comma-separated and zipped-JSON inputs."
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
    /// Clean an extract and write one region's observations as CSV.
    Clean(CleanArgs),

    /// List the valid region codes.
    Regions(RegionsArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the raw extract (.tsv, .csv or .zip).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Region of interest.
    #[arg(
        short = 'r',
        long = "region",
        value_name = "CODE",
        default_value = "PT",
        value_parser = parse_region
    )]
    pub region: Region,

    /// Output directory (default: the input file's directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct RegionsArgs {
    /// Only list actual countries, excluding aggregates like EU27_2020.
    #[arg(long = "countries-only")]
    pub countries_only: bool,
}

fn parse_region(code: &str) -> Result<Region, String> {
    code.parse::<Region>().map_err(|error| error.to_string())
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
