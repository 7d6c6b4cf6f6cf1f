//! Catalog entities.
//!
//! Each entity is a plain value. The record store never holds on to a
//! caller's instance; it reads from a borrowed snapshot and hands back fresh
//! values.

mod book;
mod user;

pub use book::Book;
pub use user::User;
