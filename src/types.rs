//! Common types used throughout idb-profiler
//!
//! This module contains the record value model shared by the snapshot
//! loader and both analysis passes, plus a few small utility types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// One stored item: field name to value, in the order the fields were captured
pub type Record = IndexMap<String, FieldValue>;

// ============================================================================
// Field Values
// ============================================================================

/// A single field value inside a record.
///
/// The set of variants is closed. Snapshot ingestion converts every raw JSON
/// value into one of these, so the analysis code dispatches on a tag instead
/// of inspecting raw values. Nested arrays and objects are kept opaque: only
/// the top-level shape of a field matters to the profiler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "JsonValue", into = "JsonValue")]
pub enum FieldValue {
    Null,
    Boolean(bool),
    Number(serde_json::Number),
    String(String),
    Array(Vec<JsonValue>),
    Object(JsonObject),
    /// A value outside the JSON model (a captured `Date`, `Blob`, ...)
    Other {
        /// Name reported as the field type
        type_name: String,
        /// Textual form used for lengths and equality
        repr: String,
    },
}

impl FieldValue {
    /// Create a value outside the JSON model
    pub fn other(type_name: impl Into<String>, repr: impl Into<String>) -> Self {
        Self::Other {
            type_name: type_name.into(),
            repr: repr.into(),
        }
    }

    /// Classify this value.
    ///
    /// Booleans are their own variant, so they can never be reported as numbers.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            FieldValue::Null => TypeTag::Null,
            FieldValue::Boolean(_) => TypeTag::Boolean,
            FieldValue::Number(_) => TypeTag::Number,
            FieldValue::String(_) => TypeTag::String,
            FieldValue::Array(_) => TypeTag::Array,
            FieldValue::Object(_) => TypeTag::Object,
            FieldValue::Other { type_name, .. } => TypeTag::Other(type_name.clone()),
        }
    }

    /// Canonical string form of the value.
    ///
    /// This is the form used for string-length statistics and for distinct
    /// value counting. Equality on this form is deliberately lossy: the number
    /// `1` and the string `"1"` render identically and count as one value.
    pub fn canonical_string(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Null => Cow::Borrowed("null"),
            FieldValue::Boolean(true) => Cow::Borrowed("true"),
            FieldValue::Boolean(false) => Cow::Borrowed("false"),
            FieldValue::Number(n) => Cow::Owned(n.to_string()),
            FieldValue::String(s) => Cow::Borrowed(s),
            FieldValue::Array(items) => {
                Cow::Owned(serde_json::to_string(items).unwrap_or_default())
            }
            FieldValue::Object(map) => Cow::Owned(serde_json::to_string(map).unwrap_or_default()),
            FieldValue::Other { repr, .. } => Cow::Borrowed(repr),
        }
    }

    /// Length of the canonical string form, in characters
    pub fn display_len(&self) -> usize {
        self.canonical_string().chars().count()
    }
}

impl From<JsonValue> for FieldValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => FieldValue::Null,
            JsonValue::Bool(b) => FieldValue::Boolean(b),
            JsonValue::Number(n) => FieldValue::Number(n),
            JsonValue::String(s) => FieldValue::String(s),
            JsonValue::Array(items) => FieldValue::Array(items),
            JsonValue::Object(map) => FieldValue::Object(map),
        }
    }
}

impl From<FieldValue> for JsonValue {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Null => JsonValue::Null,
            FieldValue::Boolean(b) => JsonValue::Bool(b),
            FieldValue::Number(n) => JsonValue::Number(n),
            FieldValue::String(s) => JsonValue::String(s),
            FieldValue::Array(items) => JsonValue::Array(items),
            FieldValue::Object(map) => JsonValue::Object(map),
            FieldValue::Other { repr, .. } => JsonValue::String(repr),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_string())
    }
}

// ============================================================================
// Type Tags
// ============================================================================

/// Inferred type of a field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    /// Fallback carrying the value's own type name
    Other(String),
}

impl TypeTag {
    /// Name used in reports
    pub fn as_str(&self) -> &str {
        match self {
            TypeTag::Null => "null",
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Array => "array",
            TypeTag::Object => "object",
            TypeTag::Other(name) => name,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TypeTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ============================================================================
// Log Level
// ============================================================================

/// Log level for the command-line tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
