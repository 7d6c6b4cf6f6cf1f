//! User entity.

use crate::identity::generate_id;
use serde::{Deserialize, Serialize};

/// A library member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Content-derived id; empty until assigned.
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    /// Date of birth, free text.
    pub dob: String,
    pub address: String,
    /// Ids of books currently held, without duplicates.
    #[serde(default)]
    pub borrowed_books: Vec<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            email: String::new(),
            dob: String::new(),
            address: String::new(),
            borrowed_books: Vec::new(),
            is_active: true,
        }
    }
}

impl User {
    /// Create an unsaved, active user with no id.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        dob: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            dob: dob.into(),
            address: address.into(),
            ..Self::default()
        }
    }

    /// Create a user and assign its content-derived id.
    pub fn with_generated_id(
        name: impl Into<String>,
        email: impl Into<String>,
        dob: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        let mut user = Self::new(name, email, dob, address);
        user.id = user.generate_id();
        user
    }

    /// Id derived from name, email, date of birth and address.
    pub fn generate_id(&self) -> String {
        generate_id(&[&self.name, &self.email, &self.dob, &self.address])
    }

    pub fn has_borrowed(&self, book_id: &str) -> bool {
        self.borrowed_books.iter().any(|id| id == book_id)
    }

    /// Record `book_id` as held. Returns false if it already was.
    pub fn add_borrowed_book(&mut self, book_id: impl Into<String>) -> bool {
        let book_id = book_id.into();
        if self.has_borrowed(&book_id) {
            return false;
        }
        self.borrowed_books.push(book_id);
        true
    }

    /// Drop `book_id` from the held list. Returns false if it was not there.
    pub fn remove_borrowed_book(&mut self, book_id: &str) -> bool {
        let before = self.borrowed_books.len();
        self.borrowed_books.retain(|id| id != book_id);
        self.borrowed_books.len() < before
    }

    /// Replace the held list, discarding repeated ids.
    pub fn set_borrowed_books(&mut self, books: Vec<String>) {
        self.borrowed_books.clear();
        for book in books {
            self.add_borrowed_book(book);
        }
    }
}
