//! CLI module
//!
//! Command-line interface for profiling snapshots.
//!
//! # Commands
//!
//! - `analyze` - Full schema and cardinality report
//! - `stores` - List databases and stores (lightweight, no analysis)
//! - `fields` - Report for a single store

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
