//! Snapshot analysis module
//!
//! Walks databases and stores, collecting declared metadata and running the
//! schema and cardinality passes over each store's records.
//!
//! # Overview
//!
//! - `analyze` - Single-threaded pass over a whole snapshot
//! - `analyze_concurrent` - Same result, one blocking task per store
//! - `AnalysisResult` - Reports keyed by database then store name
//!
//! Missing database names are reported as `"unknown"`. Missing store names
//! stay absent.

mod types;
mod walker;

pub use types::{AnalysisResult, DatabaseReport, StoreKey, StoreReport};
pub use walker::{analyze, analyze_concurrent, analyze_database, analyze_store};
