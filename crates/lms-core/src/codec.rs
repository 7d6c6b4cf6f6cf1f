//! Flat-column encoding for string lists.
//!
//! Book tags and a user's borrowed-book ids are stored as one TEXT column:
//! the elements joined with a single comma and no escaping. Decoding splits
//! on comma and drops empty tokens. This matches data already on disk, so
//! the format is kept as is, including its sharp edges:
//!
//! - an element that contains a comma comes back as several elements;
//! - empty elements are lost (`[""]` encodes to `""` and decodes to `[]`).

use tracing::warn;

/// Separator between encoded elements.
pub const SEPARATOR: char = ',';

/// Join `items` into a single column value.
pub fn encode<S: AsRef<str>>(items: &[S]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        let item = item.as_ref();
        if item.contains(SEPARATOR) {
            warn!("List element {:?} contains '{}' and will not decode intact", item, SEPARATOR);
        }
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(item);
    }
    out
}

/// Split a column value back into its non-empty elements.
pub fn decode(encoded: &str) -> Vec<String> {
    encoded
        .split(SEPARATOR)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
