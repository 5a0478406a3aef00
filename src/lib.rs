// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # idb-profiler
//!
//! Schema and cardinality profiling for captured IndexedDB snapshots.
//!
//! A snapshot is a JSON document listing databases, their object stores and
//! (some of) the records each store holds. The profiler walks every store,
//! infers a schema per field, and measures how many distinct values each
//! field takes.
//!
//! ## Features
//!
//! - **Schema inference**: field type, presence percentage and string lengths
//! - **Cardinality**: distinct value counts and ratios, with coarse classes
//! - **Partial captures**: declared store counts are reported alongside sampled records
//! - **Concurrent analysis**: stores can be analyzed on blocking worker tasks
//! - **Output**: JSON, YAML or plain-text tables
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use idb_profiler::{analyze, load_snapshot, Result, DEFAULT_SNAPSHOT_KEY};
//!
//! fn main() -> Result<()> {
//!     let snapshot = load_snapshot("capture.json", DEFAULT_SNAPSHOT_KEY)?;
//!     let result = analyze(&snapshot);
//!
//!     for (name, database) in result.iter() {
//!         for (store, report) in &database.stores {
//!             println!("{name}/{store}: {} records", report.record_count);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          Snapshot                               │
//! │        load_snapshot() → databases → stores → records           │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   │     Collection Walker   │
//!                   │  analyze / concurrent   │
//!                   └────────────┬────────────┘
//!                ┌───────────────┴───────────────┐
//! ┌──────────────┴──────────────┐ ┌──────────────┴──────────────┐
//! │       Schema Inferencer     │ │     Cardinality Analyzer    │
//! │ type, presence, lengths     │ │ unique values, ratio, class │
//! └──────────────┬──────────────┘ └──────────────┬──────────────┘
//!                └───────────────┬───────────────┘
//!                   ┌────────────┴────────────┐
//!                   │ Output: JSON/YAML/pretty│
//!                   └─────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the profiler
pub mod error;

/// Common types and type aliases
pub mod types;

/// Snapshot model and loading
pub mod snapshot;

/// Per-store schema inference
pub mod schema;

/// Per-field cardinality analysis
pub mod cardinality;

/// Collection walker and report types
pub mod analyzer;

/// Profiler configuration
pub mod config;

/// Report rendering and writing
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::{FieldValue, Record, TypeTag};

pub use analyzer::{analyze, analyze_concurrent, AnalysisResult, DatabaseReport, StoreReport};
pub use cardinality::{analyze_cardinality, FieldCardinality};
pub use config::ProfilerConfig;
pub use schema::{infer_schema, FieldSchema};
pub use snapshot::{load_snapshot, load_snapshot_from_str, Snapshot, DEFAULT_SNAPSHOT_KEY};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
