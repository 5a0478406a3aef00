//! Schema inference from captured records

use super::types::{FieldSchema, StoreSchema};
use crate::types::{Record, TypeTag};

/// Infer the schema of a store from its records.
///
/// The field set and each field's type come from the first record. Presence
/// and string lengths are computed over every record. A later record holding
/// a different type for a field never changes the reported type; it only
/// feeds the length statistics.
pub fn infer_schema(records: &[Record]) -> StoreSchema {
    let Some(first) = records.first() else {
        return StoreSchema::new();
    };

    first
        .iter()
        .map(|(key, sample)| {
            let field_type = sample.type_tag();
            let present = records.iter().filter(|r| r.contains_key(key)).count();
            let mut field = FieldSchema::new(field_type, presence_pct(present, records.len()));

            if field.field_type == TypeTag::String {
                if let Some((max, avg)) = string_lengths(records, key) {
                    field = field.with_lengths(max, avg);
                }
            }

            (key.clone(), field)
        })
        .collect()
}

/// Percentage of `total` represented by `present`, rounded half to even
pub fn presence_pct(present: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (present as f64 / total as f64 * 100.0).round_ties_even() as u32
}

/// Max and mean length of the stringified value of `key`, over the records
/// that contain it
fn string_lengths(records: &[Record], key: &str) -> Option<(usize, f64)> {
    let lengths: Vec<usize> = records
        .iter()
        .filter_map(|r| r.get(key))
        .map(|value| value.display_len())
        .collect();

    let max = *lengths.iter().max()?;
    let avg = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
    Some((max, avg))
}
