//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "macropanel",
    version,
    about = "Build cross-country macroeconomic panel tables",
    long_about = "Ingest FX, sovereign-yield, GDP, consumer-price and trade series\n\
                  from local CSV files and SDMX endpoints, normalize country codes\n\
                  and period labels, and print coverage diagnostics."
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
    /// Run the full pipeline and print the coverage report.
    Run(RunArgs),

    /// List the configured source files and SDMX queries.
    Sources,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Directory holding the local series CSV files.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// SDMX startPeriod bound applied to every remote query.
    #[arg(long = "start-period", value_name = "PERIOD", default_value = "1995")]
    pub start_period: String,

    /// Skip the remote SDMX fetches and build the file-backed tables only.
    #[arg(long = "offline")]
    pub offline: bool,
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
