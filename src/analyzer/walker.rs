//! Snapshot walker
//!
//! Visits databases and stores in snapshot order and hands each store's
//! records to the schema and cardinality passes.

use super::types::{AnalysisResult, DatabaseReport, StoreKey, StoreReport};
use crate::cardinality::analyze_cardinality;
use crate::error::{Error, Result};
use crate::schema::infer_schema;
use crate::snapshot::{Database, Snapshot, Store};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info};

/// Analyze every database and store of a snapshot.
///
/// The snapshot is only read. Each call builds a fresh result.
pub fn analyze(snapshot: &Snapshot) -> AnalysisResult {
    let reports = snapshot
        .databases
        .iter()
        .map(|database| database.stores.iter().map(analyze_store).collect::<Vec<_>>())
        .collect();
    let result = build_result(snapshot, reports);
    info!(
        "Analyzed {} databases, {} stores",
        snapshot.database_count(),
        snapshot.store_count()
    );
    result
}

/// Analyze a single database
pub fn analyze_database(database: &Database) -> DatabaseReport {
    DatabaseReport {
        version: database.version.clone(),
        stores: database
            .stores
            .iter()
            .map(|store| (StoreKey::from(store.name.clone()), analyze_store(store)))
            .collect(),
    }
}

/// Analyze a single store
pub fn analyze_store(store: &Store) -> StoreReport {
    debug!(
        "Analyzing store {:?}: {} captured records",
        store.name,
        store.records.len()
    );

    if store.is_partial() {
        debug!(
            "Store {:?} declares {} records but only {} were captured",
            store.name,
            store.record_count(),
            store.records.len()
        );
    }

    StoreReport {
        record_count: store.record_count(),
        key_path: store.key_path.clone(),
        indexes: store.indexes.clone(),
        schema: infer_schema(&store.records),
        cardinality: analyze_cardinality(&store.records),
    }
}

/// Analyze every store on the blocking thread pool.
///
/// Stores are independent, so each one becomes its own task. Results are
/// reassembled in snapshot order and match [`analyze`] exactly.
pub async fn analyze_concurrent(snapshot: Arc<Snapshot>) -> Result<AnalysisResult> {
    let mut tasks = JoinSet::new();

    for (db_index, database) in snapshot.databases.iter().enumerate() {
        for store_index in 0..database.stores.len() {
            let snapshot = Arc::clone(&snapshot);
            tasks.spawn_blocking(move || {
                let store = &snapshot.databases[db_index].stores[store_index];
                (db_index, store_index, analyze_store(store))
            });
        }
    }

    let mut reports: Vec<Vec<Option<StoreReport>>> = snapshot
        .databases
        .iter()
        .map(|db| (0..db.stores.len()).map(|_| None).collect())
        .collect();

    while let Some(joined) = tasks.join_next().await {
        let (db_index, store_index, report) = joined?;
        reports[db_index][store_index] = Some(report);
    }

    let reports = reports
        .into_iter()
        .map(|database| database.into_iter().collect::<Option<Vec<_>>>())
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| Error::Other("Store analysis task produced no report".to_string()))?;
    let result = build_result(&snapshot, reports);

    info!(
        "Analyzed {} databases, {} stores concurrently",
        snapshot.database_count(),
        snapshot.store_count()
    );
    Ok(result)
}

/// Assemble the result in snapshot order from per-store reports, laid out
/// like `snapshot.databases[..].stores[..]`
fn build_result(snapshot: &Snapshot, reports: Vec<Vec<StoreReport>>) -> AnalysisResult {
    let mut result = AnalysisResult::new();

    for (database, store_reports) in snapshot.databases.iter().zip(reports) {
        let stores = database
            .stores
            .iter()
            .zip(store_reports)
            .map(|(store, report)| (StoreKey::from(store.name.clone()), report))
            .collect();

        result.insert(
            database.display_name(),
            DatabaseReport {
                version: database.version.clone(),
                stores,
            },
        );
    }

    result
}
