//! Analysis result types
//!
//! The serialized shape is the report format consumed downstream:
//! `{ <database>: { "version", "stores": { <store>: { "record_count", ... } } } }`.

use crate::cardinality::{CardinalityClass, CardinalityThresholds, StoreCardinality};
use crate::schema::StoreSchema;
use crate::types::JsonValue;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Analysis of a whole snapshot, keyed by database name in snapshot order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnalysisResult {
    pub databases: IndexMap<String, DatabaseReport>,
}

impl AnalysisResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a database report.
    ///
    /// A repeated name replaces the earlier report but keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, report: DatabaseReport) {
        self.databases.insert(name.into(), report);
    }

    /// Get the report for a database
    pub fn get(&self, name: &str) -> Option<&DatabaseReport> {
        self.databases.get(name)
    }

    /// Number of databases
    pub fn len(&self) -> usize {
        self.databases.len()
    }

    /// Whether no database was analyzed
    pub fn is_empty(&self) -> bool {
        self.databases.is_empty()
    }

    /// Iterate over database reports in order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &DatabaseReport)> {
        self.databases.iter()
    }
}

/// Analysis of one database
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatabaseReport {
    /// Declared version, `null` when absent
    pub version: Option<serde_json::Number>,

    /// Store reports keyed by store name in declaration order
    pub stores: IndexMap<StoreKey, StoreReport>,
}

impl DatabaseReport {
    /// Get the report for a named store
    pub fn store(&self, name: &str) -> Option<&StoreReport> {
        self.stores.get(&StoreKey::from(name))
    }
}

/// Store name as reported. Unlike database names, a missing store name is
/// kept as absent rather than replaced by a default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreKey(pub Option<String>);

impl StoreKey {
    /// The store name, if the snapshot had one
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl From<Option<String>> for StoreKey {
    fn from(name: Option<String>) -> Self {
        Self(name)
    }
}

impl From<&str> for StoreKey {
    fn from(name: &str) -> Self {
        Self(Some(name.to_string()))
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_deref().unwrap_or("null"))
    }
}

/// JSON object keys must be strings, so an absent name is written as `"null"`
impl Serialize for StoreKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.as_deref().unwrap_or("null"))
    }
}

/// Analysis of one store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreReport {
    /// Declared count when present, otherwise the number of captured records
    pub record_count: serde_json::Number,

    /// Declared key path, verbatim
    pub key_path: Option<JsonValue>,

    /// Declared index descriptors, verbatim
    pub indexes: Vec<JsonValue>,

    /// Inferred field schema
    pub schema: StoreSchema,

    /// Per-field distinct value statistics
    pub cardinality: StoreCardinality,
}

impl StoreReport {
    /// Fields falling into the given cardinality class
    pub fn fields_in_class(
        &self,
        class: CardinalityClass,
        thresholds: &CardinalityThresholds,
    ) -> Vec<&str> {
        self.cardinality
            .iter()
            .filter(|(_, field)| field.classify(thresholds) == class)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Identifier-like fields
    pub fn high_cardinality_fields(&self, thresholds: &CardinalityThresholds) -> Vec<&str> {
        self.fields_in_class(CardinalityClass::High, thresholds)
    }

    /// Categorical fields
    pub fn low_cardinality_fields(&self, thresholds: &CardinalityThresholds) -> Vec<&str> {
        self.fields_in_class(CardinalityClass::Low, thresholds)
    }
}
