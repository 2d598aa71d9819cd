//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gazette - generate and publish blog articles from a keyword list
#[derive(Parser, Debug)]
#[command(name = "gazette")]
#[command(about = "Generate and publish blog articles from a keyword list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file to use instead of the default lookup
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Export tracing spans through OpenTelemetry (stdout exporter)
    #[arg(long, global = true, conflicts_with = "json_logs")]
    pub otel: bool,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Publish one article and print the run result
    Run {
        /// Write the updated run state (ARTICLES_DATA format) to this file
        #[arg(long)]
        state_out: Option<PathBuf>,
    },

    /// Show today's counters against the daily ceilings
    Quota,

    /// Print the keyword the next run would pick, without marking it used
    NextKeyword,
}
