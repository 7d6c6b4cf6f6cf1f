//! Book rows.

use crate::codec;
use crate::error::{LmsError, Result};
use crate::models::Book;
use super::columns::text;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{debug, warn};

const SELECT_COLUMNS: &str = "SELECT id, name, author, year, currentUser, tags FROM books";

pub(crate) fn insert(conn: &Connection, book: &Book) -> Result<()> {
    conn.execute(
        "INSERT INTO books (id, name, author, year, currentUser, tags)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            book.id,
            book.name,
            book.author,
            book.year,
            book.current_user,
            codec::encode(&book.tags),
        ],
    )
    .map_err(|e| LmsError::from_insert(e, "book", &book.id))?;

    debug!("Added book: {}", book.id);
    Ok(())
}

/// Overwrite every mutable column. Returns whether a row matched.
pub(crate) fn update(conn: &Connection, book: &Book) -> Result<bool> {
    let rows_affected = conn.execute(
        "UPDATE books SET name = ?1, author = ?2, year = ?3, currentUser = ?4, tags = ?5
         WHERE id = ?6",
        params![
            book.name,
            book.author,
            book.year,
            book.current_user,
            codec::encode(&book.tags),
            book.id,
        ],
    )?;

    if rows_affected == 0 {
        debug!("Update matched no book: {}", book.id);
    } else {
        debug!("Updated book: {}", book.id);
    }
    Ok(rows_affected > 0)
}

pub(crate) fn get(conn: &Connection, id: &str) -> Result<Option<Book>> {
    let book = conn
        .query_row(
            &format!("{} WHERE id = ?1", SELECT_COLUMNS),
            params![id],
            row_to_book,
        )
        .optional()?;
    Ok(book)
}

pub(crate) fn all(conn: &Connection) -> Result<Vec<Book>> {
    let mut stmt = conn.prepare(SELECT_COLUMNS)?;
    let rows = stmt.query_map([], row_to_book)?;

    let mut books = Vec::new();
    for row in rows {
        match row {
            Ok(record) => books.push(record),
            Err(e) => {
                warn!("Error reading book row: {}", e);
            }
        }
    }
    Ok(books)
}

/// Delete by id. Returns whether a row was removed.
pub(crate) fn delete(conn: &Connection, id: &str) -> Result<bool> {
    let rows_affected = conn.execute("DELETE FROM books WHERE id = ?1", params![id])?;
    if rows_affected > 0 {
        debug!("Removed book: {}", id);
    }
    Ok(rows_affected > 0)
}

pub(crate) fn count(conn: &Connection) -> Result<usize> {
    let count: usize = conn.query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))?;
    Ok(count)
}

fn row_to_book(row: &Row) -> rusqlite::Result<Book> {
    Ok(Book {
        id: text(row, 0)?,
        name: text(row, 1)?,
        author: text(row, 2)?,
        year: text(row, 3)?,
        current_user: text(row, 4)?,
        tags: codec::decode(&text(row, 5)?),
    })
}
