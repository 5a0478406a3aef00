//! Tests for snapshot loading

use super::*;
use crate::error::Error;
use crate::types::FieldValue;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;
use test_case::test_case;

// ============================================================================
// Document Shape Tests
// ============================================================================

#[test]
fn test_load_keyed_document() {
    let json = r#"{
        "url": "https://app.example.com",
        "indexedDB": [
            {
                "name": "app",
                "version": 3,
                "stores": [
                    {
                        "name": "users",
                        "keyPath": "id",
                        "indexes": [{"name": "by_email", "keyPath": "email", "unique": true}],
                        "count": 10,
                        "records": [{"id": 1, "email": "a@example.com"}]
                    }
                ]
            }
        ]
    }"#;

    let snapshot = load_snapshot_from_str(json, DEFAULT_SNAPSHOT_KEY).unwrap();
    assert_eq!(snapshot.database_count(), 1);

    let db = &snapshot.databases[0];
    assert_eq!(db.name.as_deref(), Some("app"));
    assert_eq!(db.version, Some(serde_json::Number::from(3u64)));

    let store = &db.stores[0];
    assert_eq!(store.name.as_deref(), Some("users"));
    assert_eq!(store.declared_count, Some(10u64.into()));
    assert_eq!(store.key_path, Some(json!("id")));
    assert_eq!(store.indexes.len(), 1);
    assert_eq!(store.indexes[0]["unique"], json!(true));
    assert_eq!(store.records.len(), 1);
    assert_eq!(
        store.records[0]["email"],
        FieldValue::String("a@example.com".to_string())
    );
}

#[test]
fn test_load_bare_array() {
    let snapshot = load_snapshot_from_str(r#"[{"name": "a"}, {"name": "b"}]"#, "ignored").unwrap();
    assert_eq!(snapshot.database_count(), 2);
    assert_eq!(snapshot.databases[1].display_name(), "b");
}

#[test]
fn test_missing_key_is_empty() {
    let snapshot = load_snapshot_from_str(r#"{"localStorage": {}}"#, DEFAULT_SNAPSHOT_KEY).unwrap();
    assert!(snapshot.is_empty());

    let snapshot = load_snapshot_from_str(r#"{"indexedDB": null}"#, DEFAULT_SNAPSHOT_KEY).unwrap();
    assert!(snapshot.is_empty());
}

#[test]
fn test_custom_key() {
    let json = r#"{"idb": [{"name": "x"}], "indexedDB": "not used"}"#;
    let snapshot = load_snapshot_from_str(json, "idb").unwrap();
    assert_eq!(snapshot.databases[0].display_name(), "x");
}

// ============================================================================
// Optional Field Tests
// ============================================================================

#[test]
fn test_missing_fields_default() {
    let snapshot = load_snapshot_from_str(r#"[{"stores": [{}]}]"#, DEFAULT_SNAPSHOT_KEY).unwrap();
    let db = &snapshot.databases[0];
    assert_eq!(db.name, None);
    assert_eq!(db.display_name(), UNKNOWN_DATABASE_NAME);
    assert_eq!(db.version, None);

    let store = &db.stores[0];
    assert_eq!(store.name, None);
    assert_eq!(store.declared_count, None);
    assert_eq!(store.key_path, None);
    assert!(store.indexes.is_empty());
    assert!(store.records.is_empty());
}

#[test]
fn test_null_fields_default() {
    let json = r#"[{"name": null, "version": null, "stores": [
        {"name": null, "count": null, "keyPath": null, "indexes": null, "records": null}
    ]}]"#;
    let snapshot = load_snapshot_from_str(json, DEFAULT_SNAPSHOT_KEY).unwrap();
    let store = &snapshot.databases[0].stores[0];
    assert_eq!(store.declared_count, None);
    assert!(store.indexes.is_empty());
    assert!(store.records.is_empty());

    let snapshot = load_snapshot_from_str(r#"[{"stores": null}]"#, DEFAULT_SNAPSHOT_KEY).unwrap();
    assert!(snapshot.databases[0].stores.is_empty());
}

#[test]
fn test_unknown_fields_ignored() {
    let json = r#"[{"name": "a", "origin": "https://x", "stores": [{"name": "s", "autoIncrement": true}]}]"#;
    let snapshot = load_snapshot_from_str(json, DEFAULT_SNAPSHOT_KEY).unwrap();
    assert_eq!(snapshot.store_count(), 1);
}

#[test]
fn test_record_count_prefers_declared() {
    let store = Store {
        declared_count: Some(500u64.into()),
        records: vec![Default::default(); 3],
        ..Default::default()
    };
    assert_eq!(store.record_count().as_u64(), Some(500));
    assert!(store.is_partial());

    let store = Store {
        records: vec![Default::default(); 3],
        ..Default::default()
    };
    assert_eq!(store.record_count().as_u64(), Some(3));
    assert!(!store.is_partial());
}

#[test]
fn test_store_by_report_key() {
    let json = r#"[{"name": "app", "stores": [{"name": "users"}, {"count": 7}]}]"#;
    let snapshot = load_snapshot_from_str(json, DEFAULT_SNAPSHOT_KEY).unwrap();
    let db = &snapshot.databases[0];

    assert_eq!(db.store_by_report_key("users").unwrap().name.as_deref(), Some("users"));
    let unnamed = db.store_by_report_key("null").unwrap();
    assert_eq!(unnamed.name, None);
    assert_eq!(unnamed.record_count().as_u64(), Some(7));
    assert!(db.store_by_report_key("nope").is_none());

    let json = r#"[{"stores": [{"records": []}, {"name": "null", "count": 1}]}]"#;
    let snapshot = load_snapshot_from_str(json, DEFAULT_SNAPSHOT_KEY).unwrap();
    let named = snapshot.databases[0].store_by_report_key("null").unwrap();
    assert_eq!(named.name.as_deref(), Some("null"));
}

#[test_case("2.5", Some(2.5), true ; "float count")]
#[test_case("-1", Some(-1.0), false ; "negative count")]
#[test_case("1e3", Some(1000.0), true ; "exponent count")]
#[test_case("null", None, false ; "null count")]
fn test_declared_count_any_number(count: &str, expected: Option<f64>, partial: bool) {
    let json = format!(
        r#"{{"indexedDB": [
            {{"name": "app", "stores": [
                {{"name": "s", "count": {count}, "records": [{{"a": 1}}, {{"a": 2}}]}},
                {{"name": "t", "records": [{{"b": 1}}]}}
            ]}},
            {{"name": "other", "stores": [{{"name": "u"}}]}}
        ]}}"#
    );
    let snapshot = load_snapshot_from_str(&json, DEFAULT_SNAPSHOT_KEY).unwrap();
    assert_eq!(snapshot.database_count(), 2);
    assert_eq!(snapshot.store_count(), 3);

    let store = &snapshot.databases[0].stores[0];
    assert_eq!(store.declared_count.as_ref().and_then(|n| n.as_f64()), expected);
    assert_eq!(store.is_partial(), partial);
    match expected {
        Some(value) => assert_eq!(store.record_count().as_f64(), Some(value)),
        None => assert_eq!(store.record_count().as_u64(), Some(2)),
    }
}

// ============================================================================
// Invalid Input Tests
// ============================================================================

#[test]
fn test_invalid_json() {
    let err = load_snapshot_from_str("{not json", DEFAULT_SNAPSHOT_KEY).unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));
}

#[test]
fn test_invalid_root() {
    let err = load_snapshot_from_str("42", DEFAULT_SNAPSHOT_KEY).unwrap_err();
    assert!(err.to_string().contains("found number"));
}

#[test]
fn test_key_not_an_array() {
    let err = load_snapshot_from_str(r#"{"indexedDB": {"name": "a"}}"#, DEFAULT_SNAPSHOT_KEY)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidSnapshot { .. }));
    assert!(err.to_string().contains("must be an array"));
}

#[test]
fn test_record_not_an_object() {
    let json = r#"[{"name": "a"}, {"name": "b", "stores": [{"records": [{"id": 1}, 7]}]}]"#;
    let err = load_snapshot_from_str(json, DEFAULT_SNAPSHOT_KEY).unwrap_err();
    assert!(err.is_input_error());
    assert!(err.to_string().contains("database #1"));
}

#[test]
fn test_database_not_an_object() {
    let err = load_snapshot_from_str(r#"["app"]"#, DEFAULT_SNAPSHOT_KEY).unwrap_err();
    assert!(err.to_string().contains("database #0 must be an object"));
}

// ============================================================================
// File Loading Tests
// ============================================================================

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"indexedDB": [{{"name": "cache", "stores": [{{"name": "entries", "records": [{{"k": "v"}}, {{"k": "w"}}]}}]}}]}}"#
    )
    .unwrap();

    let snapshot = load_snapshot(file.path(), DEFAULT_SNAPSHOT_KEY).unwrap();
    assert_eq!(snapshot.database_count(), 1);
    assert_eq!(snapshot.store_count(), 1);
    assert_eq!(snapshot.total_records(), 2);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_snapshot(dir.path().join("missing.json"), DEFAULT_SNAPSHOT_KEY).unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
}

// ============================================================================
// Lookup Tests
// ============================================================================

#[test]
fn test_lookup_helpers() {
    let json = r#"[
        {"name": "app", "stores": [{"name": "a"}, {"name": "b", "count": 1}, {"name": "b", "count": 2}]},
        {"stores": []},
        {"name": "app", "version": 2}
    ]"#;
    let snapshot = load_snapshot_from_str(json, DEFAULT_SNAPSHOT_KEY).unwrap();

    assert_eq!(snapshot.databases_named("app").count(), 2);
    assert_eq!(snapshot.databases_named("unknown").count(), 1);

    let db = &snapshot.databases[0];
    assert_eq!(db.store("b").unwrap().declared_count, Some(2u64.into()));
    assert!(db.store("c").is_none());
}
