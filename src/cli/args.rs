//! Command line argument parsing for the Xyston CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Xyston - in-memory full-text search over line-oriented text
#[derive(Parser, Debug, Clone)]
#[command(name = "xyston")]
#[command(about = "In-memory full-text search over line-oriented text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct XystonArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl XystonArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search a corpus file
    Search(SearchArgs),

    /// Print every record in a corpus file
    List(ListArgs),

    /// Show corpus index statistics
    Stats(StatsArgs),

    /// Interactive search session over a corpus file
    Repl(ReplArgs),
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Path to the corpus file (one record per line)
    #[arg(value_name = "CORPUS_PATH")]
    pub corpus_path: PathBuf,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Search strategy: any, all or none
    #[arg(short, long, default_value = "any")]
    pub strategy: String,
}

/// Arguments for listing records
#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Path to the corpus file (one record per line)
    #[arg(value_name = "CORPUS_PATH")]
    pub corpus_path: PathBuf,
}

/// Arguments for corpus statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the corpus file (one record per line)
    #[arg(value_name = "CORPUS_PATH")]
    pub corpus_path: PathBuf,
}

/// Arguments for the interactive session
#[derive(Parser, Debug, Clone)]
pub struct ReplArgs {
    /// Path to the corpus file (one record per line)
    #[arg(value_name = "CORPUS_PATH")]
    pub corpus_path: PathBuf,
}

/// Output formats for CLI results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
