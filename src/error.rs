//! Error types for idb-profiler
//!
//! This module defines the error hierarchy for the whole crate.
//! The analysis core never fails; errors come from the edges (snapshot
//! ingestion, configuration, report output and the CLI).

use thiserror::Error;

/// The main error type for idb-profiler
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Snapshot Errors
    // ============================================================================
    #[error("Invalid snapshot: {message}")]
    InvalidSnapshot { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("Output error: {message}")]
    Output { message: String },

    // ============================================================================
    // Lookup Errors
    // ============================================================================
    #[error("Database '{database}' not found in snapshot")]
    DatabaseNotFound { database: String },

    #[error("Store '{store}' not found in database '{database}'")]
    StoreNotFound { database: String, store: String },

    // ============================================================================
    // Concurrency Errors
    // ============================================================================
    #[error("Analysis task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid snapshot error
    pub fn snapshot(message: impl Into<String>) -> Self {
        Self::InvalidSnapshot {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }

    /// Check if this error was caused by the input snapshot rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::InvalidSnapshot { .. } | Error::JsonParse(_))
    }
}

/// Result type alias for idb-profiler
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::snapshot("record 3 is not an object");
        assert_eq!(
            err.to_string(),
            "Invalid snapshot: record 3 is not an object"
        );

        let err = Error::config("snapshot_key cannot be empty");
        assert_eq!(err.to_string(), "Configuration error: snapshot_key cannot be empty");

        let err = Error::invalid_config("cardinality.low_ratio", "must be within [0, 1]");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'cardinality.low_ratio': must be within [0, 1]"
        );

        let err = Error::StoreNotFound {
            database: "app".to_string(),
            store: "users".to_string(),
        };
        assert_eq!(err.to_string(), "Store 'users' not found in database 'app'");
    }

    #[test]
    fn test_is_input_error() {
        assert!(Error::snapshot("bad").is_input_error());
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(Error::JsonParse(parse_err).is_input_error());

        assert!(!Error::config("bad").is_input_error());
        assert!(!Error::output("bad").is_input_error());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::snapshot("missing stores"));
        let err = result.context("Failed to load snapshot 'a.json'").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to load snapshot 'a.json': Invalid snapshot: missing stores"
        );
    }

    #[test]
    fn test_result_with_context_from_io() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result
            .with_context(|| "Failed to write report".to_string())
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to write report: IO error: denied");
    }
}
