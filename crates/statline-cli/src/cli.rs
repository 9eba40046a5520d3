//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "statline",
    version,
    about = "Fetch and clean CBS StatLine open data tables",
    long_about = "Fetch tabular datasets from the CBS Open Data v4 API and \
                  reshape them into wide, human-readable tables with \
                  metadata-driven labels and decoded period dates."
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

    /// API root to use instead of the public CBS endpoint.
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search the dataset catalog by keyword.
    Search(SearchArgs),

    /// Show descriptor fields for one dataset.
    Info(DatasetArgs),

    /// Fetch a dataset and print its cleaned (or raw) table.
    Show(ShowArgs),

    /// List a dataset's metadata categories and code counts.
    Meta(DatasetArgs),
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Keyword to match against catalog titles and descriptions.
    #[arg(value_name = "KEYWORD")]
    pub keyword: String,
}

#[derive(Parser)]
pub struct DatasetArgs {
    /// Dataset identifier, e.g. 83583NED.
    #[arg(value_name = "IDENTIFIER")]
    pub identifier: String,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Dataset identifier, e.g. 83583NED.
    #[arg(value_name = "IDENTIFIER")]
    pub identifier: String,

    /// Print the raw observation table instead of the cleaned one.
    #[arg(long = "raw")]
    pub raw: bool,

    /// Maximum number of rows to print.
    #[arg(long = "limit", value_name = "N", default_value_t = 20)]
    pub limit: usize,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
