//! JSON loader for storage snapshots
//!
//! A snapshot document is either a JSON object holding the database list
//! under a top-level key, or the bare database list itself.

use crate::error::{Error, Result};
use crate::snapshot::types::{Database, Snapshot};
use crate::types::JsonValue;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Top-level key holding the database list in a capture document
pub const DEFAULT_SNAPSHOT_KEY: &str = "indexedDB";

/// Load a snapshot from a JSON file
///
/// # Examples
///
/// ```ignore
/// let snapshot = load_snapshot("./capture.json", "indexedDB")?;
/// println!("{} databases", snapshot.database_count());
/// ```
pub fn load_snapshot(path: impl AsRef<Path>, key: &str) -> Result<Snapshot> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    })?;

    let snapshot = load_snapshot_from_str(&content, key)?;
    info!(
        "Loaded snapshot {}: {} databases, {} stores, {} records",
        path.display(),
        snapshot.database_count(),
        snapshot.store_count(),
        snapshot.total_records()
    );
    Ok(snapshot)
}

/// Load a snapshot from a JSON string
pub fn load_snapshot_from_str(json: &str, key: &str) -> Result<Snapshot> {
    let value: JsonValue = serde_json::from_str(json)?;
    Snapshot::from_value(value, key)
}

impl Snapshot {
    /// Build a snapshot from an already-parsed JSON document
    pub fn from_value(value: JsonValue, key: &str) -> Result<Self> {
        let databases = match value {
            JsonValue::Object(mut root) => match root.remove(key) {
                Some(JsonValue::Array(entries)) => entries,
                Some(JsonValue::Null) | None => {
                    warn!("Snapshot has no '{}' section, treating as empty", key);
                    Vec::new()
                }
                Some(other) => {
                    return Err(Error::snapshot(format!(
                        "'{key}' must be an array of databases, found {}",
                        json_type_name(&other)
                    )))
                }
            },
            JsonValue::Array(entries) => entries,
            other => {
                return Err(Error::snapshot(format!(
                    "expected an object or an array at the root, found {}",
                    json_type_name(&other)
                )))
            }
        };

        let databases = databases
            .into_iter()
            .enumerate()
            .map(|(index, entry)| parse_database(index, entry))
            .collect::<Result<Vec<_>>>()?;

        debug!("Parsed {} database entries", databases.len());
        Ok(Snapshot::new(databases))
    }
}

/// Parse one database entry, naming its position on failure
fn parse_database(index: usize, entry: JsonValue) -> Result<Database> {
    if !entry.is_object() {
        return Err(Error::snapshot(format!(
            "database #{index} must be an object, found {}",
            json_type_name(&entry)
        )));
    }

    serde_json::from_value(entry).map_err(|e| Error::snapshot(format!("database #{index}: {e}")))
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
