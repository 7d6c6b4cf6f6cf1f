//! Centralized configuration for the library core.
//!
//! Constants live on unit structs; the one runtime-tunable piece is
//! [`StoreConfig`], which describes how the record store opens its session.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "Library Management System";
    pub const DEFAULT_DB_FILENAME: &'static str = "library.db";
}

/// Defaults applied when opening a storage session.
pub struct StoreDefaults;

impl StoreDefaults {
    pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);
}

/// How the record store opens its SQLite session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the database file. Ignored when `in_memory` is set.
    pub db_path: PathBuf,
    /// Open a private in-memory database instead of a file.
    pub in_memory: bool,
    /// How long SQLite waits on a locked database before failing.
    pub busy_timeout: Duration,
}

impl StoreConfig {
    /// File-backed configuration at `db_path`.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            ..Self::default()
        }
    }

    /// In-memory configuration, mostly useful for tests.
    pub fn in_memory() -> Self {
        Self {
            in_memory: true,
            ..Self::default()
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(AppConfig::DEFAULT_DB_FILENAME),
            in_memory: false,
            busy_timeout: StoreDefaults::BUSY_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_library_db() {
        let config = StoreConfig::default();
        assert_eq!(config.db_path, PathBuf::from("library.db"));
        assert!(!config.in_memory);
    }

    #[test]
    fn test_in_memory_keeps_timeout() {
        let config = StoreConfig::in_memory();
        assert!(config.in_memory);
        assert_eq!(config.busy_timeout, StoreDefaults::BUSY_TIMEOUT);
    }
}
