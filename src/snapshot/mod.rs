//! Snapshot module
//!
//! Parses captured IndexedDB state into the typed model the analyzer walks.
//!
//! # Overview
//!
//! The snapshot module provides:
//! - `Snapshot` - Ordered list of captured databases
//! - `Database` / `Store` - Declared metadata plus the captured records
//! - JSON loading from files or strings, with the database list found under
//!   a configurable top-level key (`indexedDB` by default)

mod loader;
mod types;

pub use loader::{load_snapshot, load_snapshot_from_str, DEFAULT_SNAPSHOT_KEY};
pub use types::{Database, Snapshot, Store, UNKNOWN_DATABASE_NAME};

#[cfg(test)]
mod tests;
