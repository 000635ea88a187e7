use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// A tool to browse and filter a catalog dataset as a paginated table
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Dataset file (JSON array of records); omit to use the bundled sample
    #[arg(short = 'f', long, global = true)]
    pub file: Option<PathBuf>,

    /// Filter expression, e.g. 'category:Home price:10..50' (see `view --help`)
    #[arg(short = 'x', long, global = true)]
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'F', long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Path to write the output to, in addition to stdout
    #[arg(short = 'o', long, global = true)]
    pub output: Option<PathBuf>,

    /// When to use colored output
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Path to a viewer config file (TOML)
    #[arg(short = 'c', long, global = true, env = "CATALOG_VIEWER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase diagnostic output (repeatable)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render one page of the filtered record table
    View {
        /// One-based page number
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Rows per page (overrides the config value)
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Browse the table interactively, editing filters through the panel
    Browse,
    /// Summarize the dataset: counts, categories, price and date extents
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table output
    Text,
    /// Machine-readable JSON
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Let the terminal decide
    Auto,
    /// Force colors on
    Always,
    /// Disable colors
    Never,
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
