//! Result row and schema types

use std::collections::HashMap;

/// One record of a query result: an ordered map of column name to value
///
/// Column order follows whatever the backend produced (`serde_json` is
/// built with `preserve_order`). No fixed schema is guaranteed across the
/// rows of one result.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Column layout of a table, view, or result: column name to type name
pub type Schema = HashMap<String, String>;

/// Build a row from column/value pairs, preserving the given order
pub fn row_from_pairs(pairs: &[(&str, serde_json::Value)]) -> Row {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}
