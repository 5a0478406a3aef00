//! Snapshot types
//!
//! These mirror the shape of a captured IndexedDB dump. Every descriptor
//! field is optional; `null` and a missing key mean the same thing.

use crate::types::{JsonValue, Record};
use serde::{Deserialize, Deserializer, Serialize};

/// Name reported for a database whose snapshot entry has no name
pub const UNKNOWN_DATABASE_NAME: &str = "unknown";

/// Captured state of every database, in capture order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    pub databases: Vec<Database>,
}

impl Snapshot {
    /// Create a snapshot from a list of databases
    pub fn new(databases: Vec<Database>) -> Self {
        Self { databases }
    }

    /// Whether the snapshot contains no databases
    pub fn is_empty(&self) -> bool {
        self.databases.is_empty()
    }

    /// Number of databases
    pub fn database_count(&self) -> usize {
        self.databases.len()
    }

    /// Number of stores across all databases
    pub fn store_count(&self) -> usize {
        self.databases.iter().map(|db| db.stores.len()).sum()
    }

    /// Number of captured records across all stores
    pub fn total_records(&self) -> usize {
        self.databases
            .iter()
            .flat_map(|db| &db.stores)
            .map(|store| store.records.len())
            .sum()
    }

    /// Databases reported under the given name
    pub fn databases_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Database> {
        self.databases
            .iter()
            .filter(move |db| db.display_name() == name)
    }
}

/// A captured database
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Database {
    /// Database name
    #[serde(default)]
    pub name: Option<String>,

    /// Declared schema version
    #[serde(default)]
    pub version: Option<serde_json::Number>,

    /// Object stores in declaration order
    #[serde(default, deserialize_with = "null_as_default")]
    pub stores: Vec<Store>,
}

impl Database {
    /// Name used in reports, `"unknown"` when the entry has none
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_DATABASE_NAME)
    }

    /// Find a store by name
    pub fn store(&self, name: &str) -> Option<&Store> {
        self.stores
            .iter()
            .rev()
            .find(|store| store.name.as_deref() == Some(name))
    }

    /// Find a store by the key it is reported under. A store without a name
    /// is reported as `"null"`, so that key also selects it when no store is
    /// actually named `"null"`.
    pub fn store_by_report_key(&self, key: &str) -> Option<&Store> {
        self.store(key).or_else(|| {
            if key == "null" {
                self.stores.iter().rev().find(|store| store.name.is_none())
            } else {
                None
            }
        })
    }
}

/// A captured object store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Store {
    /// Store name (no default is substituted when missing)
    #[serde(default)]
    pub name: Option<String>,

    /// Record count declared by the capture, may exceed `records.len()`
    #[serde(default, rename = "count")]
    pub declared_count: Option<serde_json::Number>,

    /// Declared key path, passed through untouched
    #[serde(default, rename = "keyPath")]
    pub key_path: Option<JsonValue>,

    /// Declared index descriptors, passed through untouched
    #[serde(default, deserialize_with = "null_as_default")]
    pub indexes: Vec<JsonValue>,

    /// Captured records
    #[serde(default, deserialize_with = "null_as_default")]
    pub records: Vec<Record>,
}

impl Store {
    /// Record count to report: the declared count when present, otherwise the
    /// number of captured records. Any declared number passes through as is.
    pub fn record_count(&self) -> serde_json::Number {
        self.declared_count
            .clone()
            .unwrap_or_else(|| serde_json::Number::from(self.records.len() as u64))
    }

    /// Whether the capture holds fewer records than the store declares
    pub fn is_partial(&self) -> bool {
        self.declared_count
            .as_ref()
            .and_then(serde_json::Number::as_f64)
            .is_some_and(|count| count > self.records.len() as f64)
    }
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
