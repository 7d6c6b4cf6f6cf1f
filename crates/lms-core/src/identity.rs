//! Content-derived identifiers for books and users.
//!
//! An identifier is the first 16 bytes of the SHA-256 digest of the entity's
//! defining fields, concatenated in a fixed order with no separator, rendered
//! as 32 lowercase hex characters. Identical field values always produce the
//! same identifier, so two logically identical entries collide on insert.

use sha2::{Digest, Sha256};

/// Number of digest bytes kept in an identifier.
const ID_BYTES: usize = 16;

/// Length of an identifier in hex characters.
pub const ID_LEN: usize = ID_BYTES * 2;

/// Derive an identifier from `fields`, hashed in the order given.
pub fn generate_id(fields: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for field in fields {
        hasher.update(field.as_bytes());
    }
    let digest = hasher.finalize();
    hex::encode(&digest[..ID_BYTES])
}

/// Check that `id` has the shape produced by [`generate_id`].
pub fn is_valid_id(id: &str) -> bool {
    id.len() == ID_LEN && id.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
