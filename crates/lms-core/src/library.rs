//! The operations a front end calls.

use crate::circulation;
use crate::config::StoreConfig;
use crate::error::{LmsError, Result};
use crate::models::{Book, User};
use crate::store::Database;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Catalog and circulation entry point.
///
/// Owns one [`Database`] session for its whole lifetime. Field validation
/// (blank names and the like) is the caller's job; the core stores whatever
/// it is given.
pub struct Library {
    db: Database,
}

impl Library {
    /// Create a builder for a library stored at `db_path`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use lms_core::Library;
    ///
    /// let mut library = Library::builder("library.db")
    ///     .auto_create_dirs(true)
    ///     .build()?;
    /// let book_id = library.create_book("1984", "Orwell", "1949")?;
    /// # Ok::<(), lms_core::LmsError>(())
    /// ```
    pub fn builder(db_path: impl Into<PathBuf>) -> LibraryBuilder {
        LibraryBuilder::new(db_path)
    }

    /// Open a library over an already configured session.
    pub fn from_database(mut db: Database) -> Result<Self> {
        db.connect()?;
        Ok(Self { db })
    }

    /// Open a private in-memory library.
    pub fn in_memory() -> Result<Self> {
        Self::from_database(Database::new(StoreConfig::in_memory()))
    }

    /// Direct access to the record store.
    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn list_all_books(&self) -> Result<Vec<Book>> {
        self.db.get_all_books()
    }

    pub fn list_all_users(&self) -> Result<Vec<User>> {
        self.db.get_all_users()
    }

    pub fn get_book(&self, book_id: &str) -> Result<Option<Book>> {
        self.db.get_book(book_id)
    }

    pub fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        self.db.get_user(user_id)
    }

    /// Register a user and return its id.
    ///
    /// The id is derived from the four fields, so registering the same
    /// person twice fails with [`LmsError::Duplicate`].
    pub fn create_user(&self, name: &str, email: &str, dob: &str, address: &str) -> Result<String> {
        let user = User::with_generated_id(name, email, dob, address);
        self.db.add_user(&user)?;
        info!("Created user {} ({})", user.name, user.id);
        Ok(user.id)
    }

    /// Catalog a book and return its id.
    ///
    /// Books with the same title, author and year share an id, so the second
    /// one fails with [`LmsError::Duplicate`].
    pub fn create_book(&self, name: &str, author: &str, year: &str) -> Result<String> {
        let book = Book::with_generated_id(name, author, year);
        self.db.add_book(&book)?;
        info!("Created book {} ({})", book.name, book.id);
        Ok(book.id)
    }

    /// Append a tag to a catalogued book.
    pub fn tag_book(&self, book_id: &str, tag: &str) -> Result<Book> {
        let mut book = self
            .db
            .get_book(book_id)?
            .ok_or_else(|| LmsError::BookNotFound {
                book_id: book_id.to_string(),
            })?;
        book.add_tag(tag);
        self.db.update_book(&book)?;
        Ok(book)
    }

    pub fn borrow(&mut self, user_id: &str, book_id: &str) -> Result<()> {
        circulation::borrow(&mut self.db, user_id, book_id)
    }

    pub fn return_book(&mut self, user_id: &str, book_id: &str) -> Result<()> {
        circulation::return_book(&mut self.db, user_id, book_id)
    }

    /// Delete a book row. A missing id is not an error.
    pub fn remove_book(&self, book_id: &str) -> Result<bool> {
        self.db.remove_book(book_id)
    }

    /// Delete a user row. A missing id is not an error.
    pub fn remove_user(&self, user_id: &str) -> Result<bool> {
        self.db.remove_user(user_id)
    }

    /// Close the session now instead of on drop.
    pub fn close(mut self) {
        self.db.disconnect();
    }
}

/// Builder for configuring [`Library`] initialization.
pub struct LibraryBuilder {
    config: StoreConfig,
    auto_create_dirs: bool,
}

impl LibraryBuilder {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            config: StoreConfig::new(db_path),
            auto_create_dirs: true,
        }
    }

    /// Create the database's parent directory if it is missing.
    ///
    /// Default: `true`. When disabled, a missing directory is a
    /// [`LmsError::Config`] error.
    pub fn auto_create_dirs(mut self, enable: bool) -> Self {
        self.auto_create_dirs = enable;
        self
    }

    /// Ignore the path and keep everything in memory.
    pub fn in_memory(mut self) -> Self {
        self.config.in_memory = true;
        self
    }

    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.config.busy_timeout = timeout;
        self
    }

    /// Open the session and ensure the schema.
    pub fn build(self) -> Result<Library> {
        if !self.config.in_memory && !self.auto_create_dirs {
            if let Some(parent) = self.config.db_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(LmsError::Config {
                        message: format!("Database directory does not exist: {}", parent.display()),
                    });
                }
            }
        }

        Library::from_database(Database::new(self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_and_list() {
        let library = Library::in_memory().unwrap();
        let book_id = library.create_book("1984", "Orwell", "1949").unwrap();
        let user_id = library
            .create_user("Ann", "ann@x.com", "1990-01-01", "1 Main St")
            .unwrap();

        assert_eq!(book_id.len(), 32);
        assert_eq!(library.list_all_books().unwrap().len(), 1);
        assert_eq!(library.list_all_users().unwrap()[0].id, user_id);
    }

    #[test]
    fn test_duplicate_book_is_rejected() {
        let library = Library::in_memory().unwrap();
        library.create_book("1984", "Orwell", "1949").unwrap();
        let err = library.create_book("1984", "Orwell", "1949").unwrap_err();
        assert!(matches!(err, LmsError::Duplicate { .. }));
    }

    #[test]
    fn test_tag_book() {
        let library = Library::in_memory().unwrap();
        let book_id = library.create_book("Dune", "Herbert", "1965").unwrap();
        library.tag_book(&book_id, "sf").unwrap();
        library.tag_book(&book_id, "classic").unwrap();

        let book = library.get_book(&book_id).unwrap().unwrap();
        assert_eq!(book.tags, vec!["sf", "classic"]);

        let err = library.tag_book("missing", "sf").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_builder_creates_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("data").join("library.db");

        let library = Library::builder(&db_path).build().unwrap();
        assert!(library.database().is_connected());
        assert!(db_path.exists());
        library.close();
    }

    #[test]
    fn test_builder_without_auto_create_fails_for_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("missing").join("library.db");

        let result = Library::builder(&db_path).auto_create_dirs(false).build();
        assert!(matches!(result, Err(LmsError::Config { .. })));
    }
}
