//! Lenient column readers.
//!
//! Every column in the stored schema is untyped and nullable, and rows
//! written by older front ends do not always hold the affinity the column
//! declares. These readers coerce instead of failing the row.

use rusqlite::types::ValueRef;
use rusqlite::Row;

/// Read a TEXT column. NULL reads as empty and numbers render as text.
pub(super) fn text(row: &Row, idx: usize) -> rusqlite::Result<String> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            String::from_utf8_lossy(bytes).into_owned()
        }
    })
}

/// Read a 0/1 flag with SQLite's integer coercion: NULL and non-numeric
/// text read as 0.
pub(super) fn flag(row: &Row, idx: usize) -> rusqlite::Result<bool> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Integer(i) => i != 0,
        ValueRef::Real(f) => f.trunc() != 0.0,
        ValueRef::Text(bytes) => std::str::from_utf8(bytes)
            .ok()
            .and_then(|s| s.trim().parse::<i64>().ok())
            .is_some_and(|i| i != 0),
        ValueRef::Null | ValueRef::Blob(_) => false,
    })
}
