//! Error types for the library core.
//!
//! Every failure a caller can observe is a variant of [`LmsError`]; nothing in
//! the core aborts the process.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the library core.
#[derive(Debug, Error)]
pub enum LmsError {
    // Session errors
    #[error("Database session is not open")]
    NotConnected,

    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: Option<rusqlite::Error>,
    },

    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Catalog errors
    #[error("{entity} already exists: {id}")]
    Duplicate { entity: &'static str, id: String },

    #[error("Book not found: {book_id}")]
    BookNotFound { book_id: String },

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: String },

    // Circulation errors
    #[error("Book already borrowed: {book_id}")]
    AlreadyBorrowed { book_id: String },

    #[error("Book not borrowed by this user: {book_id}")]
    NotBorrowed { book_id: String },

    // Configuration and input errors
    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, LmsError>;

impl From<std::io::Error> for LmsError {
    fn from(err: std::io::Error) -> Self {
        LmsError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<rusqlite::Error> for LmsError {
    fn from(err: rusqlite::Error) -> Self {
        LmsError::Database {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl LmsError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        LmsError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Map a failed insert to [`LmsError::Duplicate`] when SQLite reports a
    /// primary-key violation, otherwise to a plain database error.
    pub(crate) fn from_insert(err: rusqlite::Error, entity: &'static str, id: &str) -> Self {
        match err.sqlite_error_code() {
            Some(rusqlite::ErrorCode::ConstraintViolation) => LmsError::Duplicate {
                entity,
                id: id.to_string(),
            },
            _ => err.into(),
        }
    }

    /// True for the "no such row" family of errors.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LmsError::BookNotFound { .. } | LmsError::UserNotFound { .. }
        )
    }

    /// Check if the caller may retry after reconnecting or waiting.
    pub fn is_retryable(&self) -> bool {
        match self {
            LmsError::NotConnected => true,
            LmsError::Database { source, .. } => matches!(
                source.as_ref().and_then(|e| e.sqlite_error_code()),
                Some(rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked)
            ),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LmsError::AlreadyBorrowed {
            book_id: "abc".into(),
        };
        assert_eq!(err.to_string(), "Book already borrowed: abc");

        let err = LmsError::Duplicate {
            entity: "book",
            id: "abc".into(),
        };
        assert_eq!(err.to_string(), "book already exists: abc");
    }

    #[test]
    fn test_not_found_family() {
        assert!(LmsError::BookNotFound { book_id: "b".into() }.is_not_found());
        assert!(LmsError::UserNotFound { user_id: "u".into() }.is_not_found());
        assert!(!LmsError::NotConnected.is_not_found());
    }

    #[test]
    fn test_retryable_errors() {
        assert!(LmsError::NotConnected.is_retryable());
        assert!(!LmsError::NotBorrowed { book_id: "b".into() }.is_retryable());
    }
}
