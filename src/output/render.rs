//! Report rendering
//!
//! Turns an [`AnalysisResult`] or a snapshot inventory into text in one of
//! the supported formats.

use crate::analyzer::{AnalysisResult, DatabaseReport, StoreReport};
use crate::cardinality::CardinalityThresholds;
use crate::error::{Error, Result};
use crate::snapshot::Snapshot;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// JSON document
    #[default]
    Json,
    /// YAML document
    Yaml,
    /// Human-readable tables
    Pretty,
}

/// Rendering options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Indent JSON output
    pub pretty_json: bool,
    /// Thresholds used to label fields in pretty output
    pub thresholds: CardinalityThresholds,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty_json: true,
            thresholds: CardinalityThresholds::default(),
        }
    }
}

/// Render a full analysis report
pub fn render_report(
    result: &AnalysisResult,
    format: ReportFormat,
    options: &RenderOptions,
) -> Result<String> {
    match format {
        ReportFormat::Json => to_json(result, options.pretty_json),
        ReportFormat::Yaml => to_yaml(result),
        ReportFormat::Pretty => Ok(render_pretty(result, &options.thresholds)),
    }
}

/// One line of a snapshot inventory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryEntry {
    pub database: String,
    pub version: Option<serde_json::Number>,
    pub store: Option<String>,
    pub record_count: serde_json::Number,
    pub captured_records: usize,
}

/// List every store of a snapshot without analyzing records
pub fn inventory(snapshot: &Snapshot) -> Vec<InventoryEntry> {
    snapshot
        .databases
        .iter()
        .flat_map(|db| {
            db.stores.iter().map(move |store| InventoryEntry {
                database: db.display_name().to_string(),
                version: db.version.clone(),
                store: store.name.clone(),
                record_count: store.record_count(),
                captured_records: store.records.len(),
            })
        })
        .collect()
}

/// Render a snapshot inventory
pub fn render_inventory(
    snapshot: &Snapshot,
    format: ReportFormat,
    options: &RenderOptions,
) -> Result<String> {
    let entries = inventory(snapshot);
    match format {
        ReportFormat::Json => to_json(&entries, options.pretty_json),
        ReportFormat::Yaml => to_yaml(&entries),
        ReportFormat::Pretty => {
            let mut out = String::new();
            let db_width = column_width(entries.iter().map(|e| e.database.len()), "DATABASE");
            let store_width = column_width(
                entries
                    .iter()
                    .map(|e| e.store.as_deref().map_or(4, str::len)),
                "STORE",
            );
            let _ = writeln!(
                out,
                "{:<db_width$}  {:<store_width$}  {:>8}  {:>8}",
                "DATABASE", "STORE", "RECORDS", "CAPTURED"
            );
            for entry in &entries {
                let _ = writeln!(
                    out,
                    "{:<db_width$}  {:<store_width$}  {:>8}  {:>8}",
                    entry.database,
                    entry.store.as_deref().unwrap_or("null"),
                    entry.record_count.to_string(),
                    entry.captured_records
                );
            }
            Ok(out)
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.map_err(|e| Error::output(format!("Failed to serialize report: {e}")))
}

fn to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_yaml::to_string(value)
        .map_err(|e| Error::output(format!("Failed to serialize report: {e}")))
}

// ============================================================================
// Pretty Output
// ============================================================================

fn render_pretty(result: &AnalysisResult, thresholds: &CardinalityThresholds) -> String {
    let mut out = String::new();

    if result.is_empty() {
        out.push_str("No databases found\n");
        return out;
    }

    for (name, database) in result.iter() {
        render_database(&mut out, name, database, thresholds);
    }

    out
}

fn render_database(
    out: &mut String,
    name: &str,
    database: &DatabaseReport,
    thresholds: &CardinalityThresholds,
) {
    match &database.version {
        Some(version) => {
            let _ = writeln!(out, "Database: {name} (version {version})");
        }
        None => {
            let _ = writeln!(out, "Database: {name}");
        }
    }

    if database.stores.is_empty() {
        out.push_str("  (no stores)\n");
    }

    for (store_name, store) in &database.stores {
        render_store(out, &store_name.to_string(), store, thresholds);
    }

    out.push('\n');
}

fn render_store(
    out: &mut String,
    name: &str,
    store: &StoreReport,
    thresholds: &CardinalityThresholds,
) {
    let key_path = store
        .key_path
        .as_ref()
        .map_or_else(|| "-".to_string(), ToString::to_string);
    let _ = writeln!(
        out,
        "  Store: {name}  records={}  keyPath={key_path}  indexes={}",
        store.record_count,
        store.indexes.len()
    );

    if store.schema.is_empty() {
        out.push_str("    (no records captured)\n");
        return;
    }

    let width = column_width(store.schema.keys().map(String::len), "FIELD");
    let _ = writeln!(
        out,
        "    {:<width$}  {:<8}  {:>8}  {:>7}  {:>7}  {:>6}  {:>6}  CLASS",
        "FIELD", "TYPE", "PRESENCE", "MAX_LEN", "AVG_LEN", "UNIQUE", "RATIO"
    );

    for (field, schema) in &store.schema {
        let max_len = schema
            .max_length
            .map_or_else(|| "-".to_string(), |n| n.to_string());
        let avg_len = schema
            .avg_length
            .map_or_else(|| "-".to_string(), |n| format!("{n:.1}"));

        let (unique, ratio, class) = match store.cardinality.get(field) {
            Some(c) => (
                c.distinct_count.to_string(),
                format!("{:.2}", c.cardinality_ratio),
                c.classify(thresholds).to_string(),
            ),
            None => ("-".to_string(), "-".to_string(), "-".to_string()),
        };

        let _ = writeln!(
            out,
            "    {:<width$}  {:<8}  {:>8}  {:>7}  {:>7}  {:>6}  {:>6}  {}",
            field,
            schema.field_type.as_str(),
            schema.presence(),
            max_len,
            avg_len,
            unique,
            ratio,
            class
        );
    }
}

fn column_width(lengths: impl Iterator<Item = usize>, header: &str) -> usize {
    lengths.max().unwrap_or(0).max(header.len())
}
