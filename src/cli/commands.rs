//! CLI commands and argument parsing

use crate::output::ReportFormat;
use crate::types::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// IndexedDB snapshot profiler
#[derive(Parser, Debug)]
#[command(name = "idb-profiler")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Report format (overrides the config file)
    #[arg(short, long, global = true)]
    pub format: Option<ReportFormat>,

    /// Top-level key holding the database list (overrides the config file)
    #[arg(long, global = true)]
    pub snapshot_key: Option<String>,

    /// Log level
    #[arg(long, global = true, default_value = "info")]
    pub log_level: LogLevel,

    /// Verbose output (same as --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Infer schemas and cardinality for every store
    Analyze {
        /// Snapshot file (JSON)
        snapshot: PathBuf,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only analyze databases with this name
        #[arg(short, long)]
        database: Option<String>,

        /// Analyze stores concurrently
        #[arg(long)]
        parallel: bool,
    },

    /// List databases and stores with their record counts
    Stores {
        /// Snapshot file (JSON)
        snapshot: PathBuf,
    },

    /// Show the report for a single store
    Fields {
        /// Snapshot file (JSON)
        snapshot: PathBuf,

        /// Database name
        #[arg(short, long)]
        database: String,

        /// Store name (`null` selects a store without a name)
        #[arg(short, long)]
        store: String,
    },
}
