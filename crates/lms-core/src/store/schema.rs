//! Table layout and connection setup.

use crate::config::StoreConfig;
use crate::error::Result;
use rusqlite::Connection;

/// Apply per-connection settings.
pub(super) fn configure_connection(conn: &Connection, config: &StoreConfig) -> Result<()> {
    conn.busy_timeout(config.busy_timeout)?;
    conn.execute_batch(
        "
        PRAGMA journal_mode=WAL;
        PRAGMA synchronous=NORMAL;
        PRAGMA temp_store=MEMORY;
        ",
    )?;
    Ok(())
}

/// Create both tables if they are missing.
///
/// Column names and types match databases written by earlier releases;
/// availability is not a column and is derived from `currentUser`.
pub(super) fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            name TEXT,
            email TEXT,
            dob TEXT,
            address TEXT,
            borrowed_books TEXT,
            is_active INTEGER
        );

        CREATE TABLE IF NOT EXISTS books (
            id TEXT PRIMARY KEY,
            name TEXT,
            author TEXT,
            year TEXT,
            currentUser TEXT,
            tags TEXT
        );
        "#,
    )?;
    Ok(())
}
