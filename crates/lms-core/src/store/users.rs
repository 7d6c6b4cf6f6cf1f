//! User rows.

use crate::codec;
use crate::error::{LmsError, Result};
use crate::models::User;
use super::columns::{flag, text};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{debug, warn};

const SELECT_COLUMNS: &str =
    "SELECT id, name, email, dob, address, borrowed_books, is_active FROM users";

pub(crate) fn insert(conn: &Connection, user: &User) -> Result<()> {
    conn.execute(
        "INSERT INTO users (id, name, email, dob, address, borrowed_books, is_active)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            user.id,
            user.name,
            user.email,
            user.dob,
            user.address,
            codec::encode(&user.borrowed_books),
            user.is_active,
        ],
    )
    .map_err(|e| LmsError::from_insert(e, "user", &user.id))?;

    debug!("Added user: {}", user.id);
    Ok(())
}

/// Overwrite every mutable column. Returns whether a row matched.
pub(crate) fn update(conn: &Connection, user: &User) -> Result<bool> {
    let rows_affected = conn.execute(
        "UPDATE users SET name = ?1, email = ?2, dob = ?3, address = ?4,
                          borrowed_books = ?5, is_active = ?6
         WHERE id = ?7",
        params![
            user.name,
            user.email,
            user.dob,
            user.address,
            codec::encode(&user.borrowed_books),
            user.is_active,
            user.id,
        ],
    )?;

    if rows_affected == 0 {
        debug!("Update matched no user: {}", user.id);
    } else {
        debug!("Updated user: {}", user.id);
    }
    Ok(rows_affected > 0)
}

pub(crate) fn get(conn: &Connection, id: &str) -> Result<Option<User>> {
    let user = conn
        .query_row(
            &format!("{} WHERE id = ?1", SELECT_COLUMNS),
            params![id],
            row_to_user,
        )
        .optional()?;
    Ok(user)
}

pub(crate) fn all(conn: &Connection) -> Result<Vec<User>> {
    let mut stmt = conn.prepare(SELECT_COLUMNS)?;
    let rows = stmt.query_map([], row_to_user)?;

    let mut users = Vec::new();
    for row in rows {
        match row {
            Ok(record) => users.push(record),
            Err(e) => {
                warn!("Error reading user row: {}", e);
            }
        }
    }
    Ok(users)
}

/// Delete by id. Returns whether a row was removed.
pub(crate) fn delete(conn: &Connection, id: &str) -> Result<bool> {
    let rows_affected = conn.execute("DELETE FROM users WHERE id = ?1", params![id])?;
    if rows_affected > 0 {
        debug!("Removed user: {}", id);
    }
    Ok(rows_affected > 0)
}

pub(crate) fn count(conn: &Connection) -> Result<usize> {
    let count: usize = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    Ok(count)
}

fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    let mut user = User {
        id: text(row, 0)?,
        name: text(row, 1)?,
        email: text(row, 2)?,
        dob: text(row, 3)?,
        address: text(row, 4)?,
        borrowed_books: Vec::new(),
        is_active: flag(row, 6)?,
    };
    user.set_borrowed_books(codec::decode(&text(row, 5)?));
    Ok(user)
}
