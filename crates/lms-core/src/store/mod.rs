//! SQLite record store for books and users.
//!
//! [`Database`] owns the storage session. Per-entity SQL lives in the
//! `books` and `users` modules as free functions over a `&Connection`, so
//! the same code runs against the open session or inside a transaction.

pub(crate) mod books;
mod columns;
mod database;
mod schema;
pub(crate) mod users;

pub use database::Database;
