//! Schema inference module
//!
//! Derives a per-field type and presence description from the records of a
//! single store.
//!
//! # Features
//!
//! - **Type Inference**: Field type taken from the first record's value
//! - **Presence**: Share of records that carry each field
//! - **String Lengths**: Maximum and mean length for string fields
//!
//! Fields are discovered from the first record only. A field that first
//! appears in a later record is not reported.

mod inference;
mod types;

pub use inference::{infer_schema, presence_pct};
pub use types::{FieldSchema, StoreSchema};
