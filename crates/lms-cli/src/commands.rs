//! Command dispatch.

use crate::input::{entity_id, required};
use crate::Command;
use anyhow::{Context, Result};
use lms_core::{Book, Library, User};
use serde::Serialize;

pub fn run(library: &mut Library, command: Command, json: bool) -> Result<()> {
    match command {
        Command::ListBooks => {
            let books = library.list_all_books()?;
            if json {
                print_json(&books)?;
            } else {
                println!("Books in system ({}):", library.database().count_books()?);
                for book in &books {
                    println!("{}", describe_book(book));
                }
            }
        }
        Command::ListUsers => {
            let users = library.list_all_users()?;
            if json {
                print_json(&users)?;
            } else {
                println!("Users in system ({}):", library.database().count_users()?);
                for user in &users {
                    println!("{}", describe_user(user));
                }
            }
        }
        Command::AddUser {
            name,
            email,
            dob,
            address,
        } => {
            let name = required("name", &name)?;
            let email = required("email", &email)?;
            let dob = required("dob", &dob)?;
            let address = required("address", &address)?;
            let id = library
                .create_user(&name, &email, &dob, &address)
                .context("Failed to add user")?;
            report(json, "userId", &id)?;
        }
        Command::AddBook { name, author, year } => {
            let name = required("name", &name)?;
            let author = required("author", &author)?;
            let year = required("year", &year)?;
            let id = library
                .create_book(&name, &author, &year)
                .context("Failed to add book")?;
            report(json, "bookId", &id)?;
        }
        Command::Tag { book, tag } => {
            let book_id = entity_id("book", &book)?;
            let tag = required("tag", &tag)?;
            let book = library.tag_book(&book_id, &tag)?;
            if json {
                print_json(&book)?;
            } else {
                println!("{}", describe_book(&book));
            }
        }
        Command::Borrow { user, book } => {
            let user_id = entity_id("user", &user)?;
            let book_id = entity_id("book", &book)?;
            library
                .borrow(&user_id, &book_id)
                .context("Borrow failed")?;
            if !json {
                println!("Book {} lent to {}", book_id, user_id);
            }
        }
        Command::Return { user, book } => {
            let user_id = entity_id("user", &user)?;
            let book_id = entity_id("book", &book)?;
            library
                .return_book(&user_id, &book_id)
                .context("Return failed")?;
            if !json {
                println!("Book {} returned by {}", book_id, user_id);
            }
        }
    }
    Ok(())
}

fn describe_book(book: &Book) -> String {
    let status = if book.is_available() {
        "available".to_string()
    } else {
        format!("borrowed by {}", book.current_user)
    };
    let mut line = format!("- {} by {} ({}) [{}]", book.name, book.author, book.id, status);
    if !book.tags.is_empty() {
        line.push_str(&format!(" tags: {}", book.tags.join(", ")));
    }
    line
}

fn describe_user(user: &User) -> String {
    let mut line = format!("- {} ({})", user.name, user.id);
    if !user.is_active {
        line.push_str(" [inactive]");
    }
    if !user.borrowed_books.is_empty() {
        line.push_str(&format!(" holds {} book(s)", user.borrowed_books.len()));
    }
    line
}

fn report(json: bool, key: &str, id: &str) -> Result<()> {
    if json {
        let mut object = serde_json::Map::new();
        object.insert(key.to_string(), id.into());
        print_json(&object)
    } else {
        println!("{}", id);
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
