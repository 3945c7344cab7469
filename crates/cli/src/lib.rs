//! sqlaudit CLI library - exposed for integration tests

pub mod commands;
pub mod input;
pub mod logging;
pub mod output;

use clap::{Parser, Subcommand};
use sqlaudit_core::{ReportFormat, SampleMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sqlaudit")]
#[command(about = "Review SQL queries against a catalog of heuristic rules", long_about = None)]
#[command(version = sqlaudit_core::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Config file (default: nearest .sqlaudit.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Exit with code 1 when any query scores below this
    #[arg(long, global = true)]
    pub min_score: Option<u8>,

    /// What the query block shows: fingerprint, sample, pretty
    #[arg(long, value_enum, global = true)]
    pub sample: Option<SampleArg>,

    /// Rule prefixes to ignore, added to the config list
    #[arg(long, value_delimiter = ',', global = true)]
    pub ignore: Vec<String>,

    /// Never show the OK verdict
    #[arg(long, global = true)]
    pub hide_ok: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Review SQL from a file or stdin (default command)
    Review {
        /// SQL file, or `-` for stdin (default: stdin)
        file: Option<PathBuf>,
    },

    /// List every rule in the catalog
    Rules,

    /// Explain a rule, or every rule in a namespace
    Explain {
        /// Rule item (`COL.001`) or namespace (`COL`)
        item: String,
    },

    /// Initialize .sqlaudit.toml configuration
    Init {
        /// Path to initialize (default: current directory)
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Markdown,
    Html,
    Json,
    Lint,
    Text,
    /// Text plus every verdict's debug form
    Dump,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Markdown => ReportFormat::Markdown,
            OutputFormat::Html => ReportFormat::Html,
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Lint => ReportFormat::Lint,
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Dump => ReportFormat::Dump,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SampleArg {
    Fingerprint,
    Sample,
    Pretty,
}

impl From<SampleArg> for SampleMode {
    fn from(arg: SampleArg) -> Self {
        match arg {
            SampleArg::Fingerprint => SampleMode::Fingerprint,
            SampleArg::Sample => SampleMode::Sample,
            SampleArg::Pretty => SampleMode::Pretty,
        }
    }
}
