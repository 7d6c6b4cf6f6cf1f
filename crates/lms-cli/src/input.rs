//! Console input cleanup.

use lms_core::identity::{is_valid_id, ID_LEN};
use lms_core::{LmsError, Result};

/// Trim `value` and reject it if nothing is left.
pub fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LmsError::Validation {
            field: field.to_string(),
            message: "must not be blank".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Trim an entity id and check it looks like a generated one.
pub fn entity_id(field: &str, value: &str) -> Result<String> {
    let trimmed = required(field, value)?;
    if !is_valid_id(&trimmed) {
        return Err(LmsError::Validation {
            field: field.to_string(),
            message: format!("expected {} lowercase hex characters", ID_LEN),
        });
    }
    Ok(trimmed)
}
