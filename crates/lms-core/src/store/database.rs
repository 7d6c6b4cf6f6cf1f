//! Storage session handle.

use super::{books, schema, users};
use crate::config::StoreConfig;
use crate::error::{LmsError, Result};
use crate::models::{Book, User};
use rusqlite::{Connection, Transaction, TransactionBehavior};
use tracing::{info, warn};

/// An explicitly owned SQLite session.
///
/// Created disconnected; [`connect`](Self::connect) opens the database and
/// creates the schema. Every operation on a closed session returns
/// [`LmsError::NotConnected`]. The session is closed on drop, so it is
/// released on every exit path.
///
/// A `Database` is meant for one logical actor. Callers sharing it between
/// threads must serialize access themselves.
pub struct Database {
    config: StoreConfig,
    conn: Option<Connection>,
}

impl Database {
    /// Create a closed handle for `config`.
    pub fn new(config: StoreConfig) -> Self {
        Self { config, conn: None }
    }

    /// Create a handle and connect it.
    pub fn open(config: StoreConfig) -> Result<Self> {
        let mut db = Self::new(config);
        db.connect()?;
        Ok(db)
    }

    /// Open the session and ensure the schema exists.
    ///
    /// Connecting an already open session does nothing.
    pub fn connect(&mut self) -> Result<()> {
        if self.conn.is_some() {
            return Ok(());
        }

        let conn = if self.config.in_memory {
            Connection::open_in_memory()?
        } else {
            let db_path = &self.config.db_path;
            if let Some(parent) = db_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent)
                        .map_err(|e| LmsError::io_with_path(e, parent))?;
                }
            }
            Connection::open(db_path).map_err(|e| LmsError::Database {
                message: format!("Failed to open database {}: {}", db_path.display(), e),
                source: Some(e),
            })?
        };

        schema::configure_connection(&conn, &self.config)?;
        schema::ensure_schema(&conn)?;

        if self.config.in_memory {
            info!("Opened in-memory library database");
        } else {
            info!("Opened library database at {}", self.config.db_path.display());
        }
        self.conn = Some(conn);
        Ok(())
    }

    /// Close the session. Closing a closed session is a no-op.
    pub fn disconnect(&mut self) {
        if let Some(conn) = self.conn.take() {
            match conn.close() {
                Ok(()) => info!("Closed library database"),
                Err((_, e)) => warn!("Error while closing library database: {}", e),
            }
        }
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn conn(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or(LmsError::NotConnected)
    }

    /// Start an immediate (write-locking) transaction on the open session.
    ///
    /// The transaction rolls back when dropped without `commit`.
    pub(crate) fn begin(&mut self) -> Result<Transaction<'_>> {
        let conn = self.conn.as_mut().ok_or(LmsError::NotConnected)?;
        Ok(conn.transaction_with_behavior(TransactionBehavior::Immediate)?)
    }

    // Book operations

    /// Insert a new book row. Fails with [`LmsError::Duplicate`] if the id exists.
    pub fn add_book(&self, book: &Book) -> Result<()> {
        books::insert(self.conn()?, book)
    }

    /// Delete a book row. Deleting a missing id succeeds and returns `false`.
    pub fn remove_book(&self, book_id: &str) -> Result<bool> {
        books::delete(self.conn()?, book_id)
    }

    /// Overwrite a book row. A missing id succeeds and returns `false`.
    pub fn update_book(&self, book: &Book) -> Result<bool> {
        books::update(self.conn()?, book)
    }

    pub fn get_book(&self, book_id: &str) -> Result<Option<Book>> {
        books::get(self.conn()?, book_id)
    }

    /// All books in storage order.
    pub fn get_all_books(&self) -> Result<Vec<Book>> {
        books::all(self.conn()?)
    }

    pub fn count_books(&self) -> Result<usize> {
        books::count(self.conn()?)
    }

    // User operations

    /// Insert a new user row. Fails with [`LmsError::Duplicate`] if the id exists.
    pub fn add_user(&self, user: &User) -> Result<()> {
        users::insert(self.conn()?, user)
    }

    /// Delete a user row. Deleting a missing id succeeds and returns `false`.
    pub fn remove_user(&self, user_id: &str) -> Result<bool> {
        users::delete(self.conn()?, user_id)
    }

    /// Overwrite a user row. A missing id succeeds and returns `false`.
    pub fn update_user(&self, user: &User) -> Result<bool> {
        users::update(self.conn()?, user)
    }

    pub fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        users::get(self.conn()?, user_id)
    }

    /// All users in storage order.
    pub fn get_all_users(&self) -> Result<Vec<User>> {
        users::all(self.conn()?)
    }

    pub fn count_users(&self) -> Result<usize> {
        users::count(self.conn()?)
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        self.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_db() -> Database {
        Database::open(StoreConfig::in_memory()).unwrap()
    }

    fn orwell() -> Book {
        Book::with_generated_id("1984", "Orwell", "1949")
    }

    fn ann() -> User {
        User::with_generated_id("Ann", "ann@x.com", "1990-01-01", "1 Main St")
    }

    #[test]
    fn test_add_and_get_book() {
        let db = create_test_db();
        let mut book = orwell();
        book.add_tag("dystopia");
        book.add_tag("classic");
        db.add_book(&book).unwrap();

        let loaded = db.get_book(&book.id).unwrap().unwrap();
        assert_eq!(loaded, book);
        assert!(loaded.is_available());
    }

    #[test]
    fn test_add_duplicate_book_fails() {
        let db = create_test_db();
        db.add_book(&orwell()).unwrap();

        let err = db.add_book(&orwell()).unwrap_err();
        assert!(matches!(err, LmsError::Duplicate { entity: "book", .. }));
        assert_eq!(db.count_books().unwrap(), 1);
    }

    #[test]
    fn test_update_book() {
        let db = create_test_db();
        let mut book = orwell();
        db.add_book(&book).unwrap();

        book.lend_to("someone");
        book.add_tag("on-loan");
        assert!(db.update_book(&book).unwrap());

        let loaded = db.get_book(&book.id).unwrap().unwrap();
        assert_eq!(loaded.current_user, "someone");
        assert!(!loaded.is_available());
        assert_eq!(loaded.tags, vec!["on-loan"]);
    }

    #[test]
    fn test_update_missing_book_is_not_an_error() {
        let db = create_test_db();
        assert!(!db.update_book(&orwell()).unwrap());
        assert_eq!(db.count_books().unwrap(), 0);
    }

    #[test]
    fn test_remove_book() {
        let db = create_test_db();
        let book = orwell();
        db.add_book(&book).unwrap();

        assert!(db.remove_book(&book.id).unwrap());
        assert!(db.get_book(&book.id).unwrap().is_none());
        assert!(!db.remove_book(&book.id).unwrap());
    }

    #[test]
    fn test_get_missing_returns_none() {
        let db = create_test_db();
        assert!(db.get_book("nonexistent-id").unwrap().is_none());
        assert!(db.get_user("nonexistent-id").unwrap().is_none());
    }

    #[test]
    fn test_get_all_on_empty_store() {
        let db = create_test_db();
        assert!(db.get_all_books().unwrap().is_empty());
        assert!(db.get_all_users().unwrap().is_empty());
    }

    #[test]
    fn test_user_crud() {
        let db = create_test_db();
        let mut user = ann();
        user.add_borrowed_book("b1");
        user.add_borrowed_book("b2");
        db.add_user(&user).unwrap();

        let loaded = db.get_user(&user.id).unwrap().unwrap();
        assert_eq!(loaded, user);

        user.is_active = false;
        user.remove_borrowed_book("b1");
        assert!(db.update_user(&user).unwrap());

        let loaded = db.get_user(&user.id).unwrap().unwrap();
        assert!(!loaded.is_active);
        assert_eq!(loaded.borrowed_books, vec!["b2"]);

        assert!(db.remove_user(&user.id).unwrap());
        assert_eq!(db.count_users().unwrap(), 0);
    }

    #[test]
    fn test_update_and_remove_missing_user_is_not_an_error() {
        let db = create_test_db();
        assert!(!db.update_user(&ann()).unwrap());
        assert!(!db.remove_user(&ann().id).unwrap());
        assert_eq!(db.count_users().unwrap(), 0);
    }

    #[test]
    fn test_malformed_legacy_rows_do_not_hide_good_rows() {
        let db = create_test_db();
        let user = ann();
        let book = orwell();
        db.add_user(&user).unwrap();
        db.add_book(&book).unwrap();
        db.conn()
            .unwrap()
            .execute(
                "INSERT INTO users (id, name, is_active) VALUES ('legacy', 'Bob', 'yes')",
                [],
            )
            .unwrap();
        db.conn()
            .unwrap()
            .execute(
                "INSERT INTO books (id, name, year, tags) VALUES ('legacy', 'Dune', 1965, 42)",
                [],
            )
            .unwrap();

        let users = db.get_all_users().unwrap();
        assert_eq!(users.len(), 2);
        assert!(users.contains(&user));
        let legacy = db.get_user("legacy").unwrap().unwrap();
        assert_eq!(legacy.name, "Bob");
        assert!(!legacy.is_active);

        let books = db.get_all_books().unwrap();
        assert_eq!(books.len(), 2);
        assert!(books.contains(&book));
        let legacy = db.get_book("legacy").unwrap().unwrap();
        assert_eq!(legacy.year, "1965");
        assert_eq!(legacy.tags, vec!["42"]);
    }

    #[test]
    fn test_add_duplicate_user_fails() {
        let db = create_test_db();
        db.add_user(&ann()).unwrap();
        let err = db.add_user(&ann()).unwrap_err();
        assert!(matches!(err, LmsError::Duplicate { entity: "user", .. }));
    }

    #[test]
    fn test_disconnected_operations_fail_cleanly() {
        let mut db = Database::new(StoreConfig::in_memory());
        assert!(!db.is_connected());

        assert!(matches!(db.add_book(&orwell()), Err(LmsError::NotConnected)));
        assert!(matches!(db.get_book("x"), Err(LmsError::NotConnected)));
        assert!(matches!(db.get_all_users(), Err(LmsError::NotConnected)));
        assert!(matches!(db.remove_user("x"), Err(LmsError::NotConnected)));

        // Closing a never-opened session is harmless.
        db.disconnect();
        db.disconnect();
    }

    #[test]
    fn test_reconnect_is_idempotent() {
        let mut db = create_test_db();
        db.add_book(&orwell()).unwrap();
        db.connect().unwrap();
        assert_eq!(db.count_books().unwrap(), 1);
    }

    #[test]
    fn test_file_database_persists_across_sessions() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested").join("library.db");
        let book = orwell();

        {
            let db = Database::open(StoreConfig::new(&db_path)).unwrap();
            db.add_book(&book).unwrap();
        }

        let mut db = Database::open(StoreConfig::new(&db_path)).unwrap();
        assert_eq!(db.get_all_books().unwrap(), vec![book]);
        db.disconnect();
        assert!(!db.is_connected());
    }

    #[test]
    fn test_reads_rows_with_null_columns() {
        let db = create_test_db();
        db.conn()
            .unwrap()
            .execute("INSERT INTO books (id) VALUES ('bare')", [])
            .unwrap();
        db.conn()
            .unwrap()
            .execute("INSERT INTO users (id) VALUES ('bare')", [])
            .unwrap();

        let book = db.get_book("bare").unwrap().unwrap();
        assert!(book.tags.is_empty());
        assert!(book.is_available());

        let user = db.get_user("bare").unwrap().unwrap();
        assert!(user.borrowed_books.is_empty());
        assert!(!user.is_active);
    }
}
