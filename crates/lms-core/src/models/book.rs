//! Book entity.

use crate::identity::generate_id;
use serde::{Deserialize, Serialize};

/// A catalogued book.
///
/// Availability is not stored: a book is available exactly when nobody
/// holds it, i.e. `current_user` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Content-derived id; empty until assigned.
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub author: String,
    /// Publication year, free text.
    pub year: String,
    /// Id of the borrowing user, empty when on the shelf.
    #[serde(default)]
    pub current_user: String,
    /// Tags in insertion order; duplicates allowed.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Book {
    /// Create an unsaved book with no id.
    pub fn new(name: impl Into<String>, author: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            year: year.into(),
            ..Self::default()
        }
    }

    /// Create a book and assign its content-derived id.
    pub fn with_generated_id(
        name: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        let mut book = Self::new(name, author, year);
        book.id = book.generate_id();
        book
    }

    /// Id derived from title, author and year.
    pub fn generate_id(&self) -> String {
        generate_id(&[&self.name, &self.author, &self.year])
    }

    pub fn is_available(&self) -> bool {
        self.current_user.is_empty()
    }

    /// Mark the book as held by `user_id`.
    pub fn lend_to(&mut self, user_id: impl Into<String>) {
        self.current_user = user_id.into();
    }

    /// Put the book back on the shelf.
    pub fn shelve(&mut self) {
        self.current_user.clear();
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }

    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.tags = tags;
    }
}
