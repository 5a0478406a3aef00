//! Cardinality analysis module
//!
//! Counts distinct values per field and normalizes them by the store's
//! record count, so callers can tell identifier-like fields from
//! categorical ones.
//!
//! Values are compared by their canonical string form, not structurally:
//! the number `1` and the string `"1"` count as the same value.

mod analyzer;
mod types;

pub use analyzer::analyze_cardinality;
pub use types::{CardinalityClass, CardinalityThresholds, FieldCardinality, StoreCardinality};
