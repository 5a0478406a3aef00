//! Schema types

use crate::types::TypeTag;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Inferred schema of a store, keyed by field name in first-record order
pub type StoreSchema = IndexMap<String, FieldSchema>;

/// Inferred description of one field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSchema {
    /// Type of the field's value in the first record
    #[serde(rename = "type")]
    pub field_type: TypeTag,

    /// Percentage of records containing the field, rounded to an integer
    #[serde(rename = "presence", serialize_with = "serialize_presence")]
    pub presence_pct: u32,

    /// Longest stringified value (string fields only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Mean stringified value length (string fields only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_length: Option<f64>,
}

impl FieldSchema {
    /// Create a field schema without length statistics
    pub fn new(field_type: TypeTag, presence_pct: u32) -> Self {
        Self {
            field_type,
            presence_pct,
            max_length: None,
            avg_length: None,
        }
    }

    /// Attach string length statistics
    #[must_use]
    pub fn with_lengths(mut self, max_length: usize, avg_length: f64) -> Self {
        self.max_length = Some(max_length);
        self.avg_length = Some(avg_length);
        self
    }

    /// Presence formatted as a percentage, e.g. `"75%"`
    pub fn presence(&self) -> String {
        format!("{}%", self.presence_pct)
    }

    /// Whether every record carries this field
    pub fn is_always_present(&self) -> bool {
        self.presence_pct == 100
    }
}

fn serialize_presence<S: Serializer>(pct: &u32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{pct}%"))
}
