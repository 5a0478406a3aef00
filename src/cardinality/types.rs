//! Cardinality types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cardinality of every first-record field of a store
pub type StoreCardinality = IndexMap<String, FieldCardinality>;

/// Distinct value statistics for one field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldCardinality {
    /// Number of distinct canonical string values
    #[serde(rename = "unique_values")]
    pub distinct_count: usize,

    /// `distinct_count` divided by the store's total record count
    pub cardinality_ratio: f64,
}

impl FieldCardinality {
    /// Compute the ratio of `distinct_count` over `total_records`
    pub fn new(distinct_count: usize, total_records: usize) -> Self {
        let cardinality_ratio = if total_records == 0 {
            0.0
        } else {
            distinct_count as f64 / total_records as f64
        };

        Self {
            distinct_count,
            cardinality_ratio,
        }
    }

    /// Classify this field against the given thresholds
    pub fn classify(&self, thresholds: &CardinalityThresholds) -> CardinalityClass {
        if self.distinct_count <= 1 {
            CardinalityClass::Constant
        } else if self.cardinality_ratio <= thresholds.low_ratio {
            CardinalityClass::Low
        } else if self.cardinality_ratio >= thresholds.high_ratio {
            CardinalityClass::High
        } else {
            CardinalityClass::Medium
        }
    }
}

/// Coarse cardinality bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardinalityClass {
    /// At most one distinct value
    Constant,
    /// Few distinct values relative to the record count (categorical)
    Low,
    Medium,
    /// Mostly unique values (identifier-like)
    High,
}

impl fmt::Display for CardinalityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardinalityClass::Constant => write!(f, "constant"),
            CardinalityClass::Low => write!(f, "low"),
            CardinalityClass::Medium => write!(f, "medium"),
            CardinalityClass::High => write!(f, "high"),
        }
    }
}

/// Ratio boundaries between cardinality classes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardinalityThresholds {
    /// Ratios at or below this are low-cardinality
    #[serde(default = "default_low_ratio")]
    pub low_ratio: f64,

    /// Ratios at or above this are high-cardinality
    #[serde(default = "default_high_ratio")]
    pub high_ratio: f64,
}

impl Default for CardinalityThresholds {
    fn default() -> Self {
        Self {
            low_ratio: default_low_ratio(),
            high_ratio: default_high_ratio(),
        }
    }
}

fn default_low_ratio() -> f64 {
    0.1
}

fn default_high_ratio() -> f64 {
    0.9
}
