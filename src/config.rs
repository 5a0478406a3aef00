//! Profiler configuration
//!
//! Settings are read from an optional YAML file. Every field has a default,
//! so an empty file (or no file at all) is a valid configuration. Command
//! line flags are applied on top by the CLI runner.

use crate::cardinality::CardinalityThresholds;
use crate::error::{Error, Result};
use crate::output::ReportFormat;
use crate::snapshot::DEFAULT_SNAPSHOT_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete profiler configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilerConfig {
    /// Top-level key holding the database list in a capture document
    #[serde(default = "default_snapshot_key")]
    pub snapshot_key: String,

    /// Analyze stores concurrently
    #[serde(default)]
    pub parallel: bool,

    /// Report output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Cardinality classification thresholds
    #[serde(default)]
    pub cardinality: CardinalityThresholds,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            snapshot_key: default_snapshot_key(),
            parallel: false,
            output: OutputConfig::default(),
            cardinality: CardinalityThresholds::default(),
        }
    }
}

fn default_snapshot_key() -> String {
    DEFAULT_SNAPSHOT_KEY.to_string()
}

impl ProfilerConfig {
    /// Load and validate a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a YAML configuration
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as null; treat it as all defaults
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.snapshot_key.is_empty() {
            return Err(Error::invalid_config("snapshot_key", "cannot be empty"));
        }

        let CardinalityThresholds {
            low_ratio,
            high_ratio,
        } = self.cardinality;

        if !(0.0..=1.0).contains(&low_ratio) {
            return Err(Error::invalid_config(
                "cardinality.low_ratio",
                format!("must be within [0, 1], got {low_ratio}"),
            ));
        }
        if !(0.0..=1.0).contains(&high_ratio) {
            return Err(Error::invalid_config(
                "cardinality.high_ratio",
                format!("must be within [0, 1], got {high_ratio}"),
            ));
        }
        if low_ratio > high_ratio {
            return Err(Error::invalid_config(
                "cardinality",
                format!("low_ratio ({low_ratio}) exceeds high_ratio ({high_ratio})"),
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Output Config
// ============================================================================

/// Report output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report format
    #[serde(default)]
    pub format: ReportFormat,

    /// Indent JSON reports
    #[serde(default = "default_true")]
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            pretty_json: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ProfilerConfig::default();
        assert_eq!(config.snapshot_key, "indexedDB");
        assert!(!config.parallel);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.output.pretty_json);
        assert_eq!(config.cardinality.low_ratio, 0.1);
        assert_eq!(config.cardinality.high_ratio, 0.9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
snapshot_key: idb
parallel: true
output:
  format: pretty
  pretty_json: false
cardinality:
  low_ratio: 0.05
  high_ratio: 0.95
"#;

        let config = ProfilerConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.snapshot_key, "idb");
        assert!(config.parallel);
        assert_eq!(config.output.format, ReportFormat::Pretty);
        assert!(!config.output.pretty_json);
        assert_eq!(config.cardinality.low_ratio, 0.05);
        assert_eq!(config.cardinality.high_ratio, 0.95);
    }

    #[test]
    fn test_parse_partial_config() {
        let yaml = r#"
cardinality:
  low_ratio: 0.2
"#;

        let config = ProfilerConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.snapshot_key, "indexedDB");
        assert_eq!(config.cardinality.low_ratio, 0.2);
        assert_eq!(config.cardinality.high_ratio, 0.9);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_empty_config() {
        assert_eq!(
            ProfilerConfig::from_yaml("").unwrap(),
            ProfilerConfig::default()
        );
        assert_eq!(
            ProfilerConfig::from_yaml("  \n").unwrap(),
            ProfilerConfig::default()
        );
    }

    #[test]
    fn test_invalid_ratio() {
        let err = ProfilerConfig::from_yaml("cardinality:\n  high_ratio: 1.5\n").unwrap_err();
        assert!(err.to_string().contains("cardinality.high_ratio"));

        let err = ProfilerConfig::from_yaml("cardinality:\n  low_ratio: -0.1\n").unwrap_err();
        assert!(err.to_string().contains("cardinality.low_ratio"));
    }

    #[test]
    fn test_inverted_thresholds() {
        let yaml = "cardinality:\n  low_ratio: 0.8\n  high_ratio: 0.2\n";
        let err = ProfilerConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_empty_snapshot_key() {
        let err = ProfilerConfig::from_yaml("snapshot_key: \"\"\n").unwrap_err();
        assert!(err.to_string().contains("snapshot_key"));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = ProfilerConfig::from_yaml("output: [unclosed").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "parallel: true").unwrap();

        let config = ProfilerConfig::from_file(file.path()).unwrap();
        assert!(config.parallel);

        let err = ProfilerConfig::from_file("/nonexistent/profiler.yaml").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
