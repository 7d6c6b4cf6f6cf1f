//! Borrow and return.
//!
//! A loan touches two rows: the user's borrowed-book list and the book's
//! current borrower. Both writes run in one immediate transaction; any
//! failure rolls back, so a user never lists a book that does not name them
//! as its borrower.

use crate::error::{LmsError, Result};
use crate::store::{books, users, Database};
use tracing::{info, warn};

/// Lend `book_id` to `user_id`.
///
/// Fails with [`LmsError::AlreadyBorrowed`] if the user already holds the
/// book or another user does, and with [`LmsError::UserNotFound`] or
/// [`LmsError::BookNotFound`] if either row is missing. Nothing is written
/// on failure.
pub fn borrow(db: &mut Database, user_id: &str, book_id: &str) -> Result<()> {
    let tx = db.begin()?;

    let mut user = users::get(&tx, user_id)?.ok_or_else(|| LmsError::UserNotFound {
        user_id: user_id.to_string(),
    })?;
    if !user.add_borrowed_book(book_id) {
        return Err(LmsError::AlreadyBorrowed {
            book_id: book_id.to_string(),
        });
    }
    users::update(&tx, &user)?;

    let mut book = books::get(&tx, book_id)?.ok_or_else(|| LmsError::BookNotFound {
        book_id: book_id.to_string(),
    })?;
    if !book.is_available() {
        return Err(LmsError::AlreadyBorrowed {
            book_id: book_id.to_string(),
        });
    }
    book.lend_to(user_id);
    books::update(&tx, &book)?;

    tx.commit()?;
    info!("User {} borrowed book {}", user_id, book_id);
    Ok(())
}

/// Take `book_id` back from `user_id`.
///
/// Fails with [`LmsError::NotBorrowed`] if the user does not hold the book,
/// and with [`LmsError::UserNotFound`] or [`LmsError::BookNotFound`] if
/// either row is missing. Nothing is written on failure.
pub fn return_book(db: &mut Database, user_id: &str, book_id: &str) -> Result<()> {
    let tx = db.begin()?;

    let mut user = users::get(&tx, user_id)?.ok_or_else(|| LmsError::UserNotFound {
        user_id: user_id.to_string(),
    })?;
    if !user.remove_borrowed_book(book_id) {
        return Err(LmsError::NotBorrowed {
            book_id: book_id.to_string(),
        });
    }
    users::update(&tx, &user)?;

    let mut book = books::get(&tx, book_id)?.ok_or_else(|| LmsError::BookNotFound {
        book_id: book_id.to_string(),
    })?;
    if book.current_user != user_id {
        warn!(
            "Book {} was recorded as held by {:?}, not {}; clearing anyway",
            book_id, book.current_user, user_id
        );
    }
    book.shelve();
    books::update(&tx, &book)?;

    tx.commit()?;
    info!("User {} returned book {}", user_id, book_id);
    Ok(())
}
