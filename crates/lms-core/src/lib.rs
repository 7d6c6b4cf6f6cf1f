//! LMS Core - headless catalog and circulation layer for a small library.
//!
//! This crate persists books and users to SQLite and keeps the two in step
//! when books are borrowed and returned. It has no user interface; the
//! `lms-cli` crate is one front end over it.
//!
//! # Example
//!
//! ```rust
//! use lms_core::Library;
//!
//! fn main() -> lms_core::Result<()> {
//!     let mut library = Library::in_memory()?;
//!
//!     let book_id = library.create_book("1984", "Orwell", "1949")?;
//!     let user_id = library.create_user("Ann", "ann@x.com", "1990-01-01", "1 Main St")?;
//!
//!     library.borrow(&user_id, &book_id)?;
//!     assert!(!library.get_book(&book_id)?.unwrap().is_available());
//!
//!     library.return_book(&user_id, &book_id)?;
//!     Ok(())
//! }
//! ```

pub mod circulation;
pub mod codec;
pub mod config;
pub mod error;
pub mod identity;
pub mod models;
pub mod store;

mod library;

pub use config::{AppConfig, StoreConfig};
pub use error::{LmsError, Result};
pub use identity::generate_id;
pub use library::{Library, LibraryBuilder};
pub use models::{Book, User};
pub use store::Database;
