//! Distinct value counting

use super::types::{FieldCardinality, StoreCardinality};
use crate::types::{FieldValue, Record};
use std::borrow::Cow;
use std::collections::HashSet;

/// Count distinct values for every field of the first record.
///
/// Only records that contain a field contribute values to it, but the ratio
/// is always taken over the full record count, so a sparse field reports a
/// lower ratio than its populated records alone would suggest.
pub fn analyze_cardinality(records: &[Record]) -> StoreCardinality {
    let Some(first) = records.first() else {
        return StoreCardinality::new();
    };

    first
        .keys()
        .map(|key| {
            let distinct: HashSet<Cow<'_, str>> = records
                .iter()
                .filter_map(|r| r.get(key))
                .map(FieldValue::canonical_string)
                .collect();

            (
                key.clone(),
                FieldCardinality::new(distinct.len(), records.len()),
            )
        })
        .collect()
}
