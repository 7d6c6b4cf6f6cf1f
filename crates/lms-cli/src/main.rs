//! LMS CLI - command-line front end for the library catalog.
//!
//! Each invocation opens the database, runs one command and closes it.
//! Input trimming and blank-field checks happen here; the core stores
//! whatever it is given.

mod commands;
mod input;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lms_core::{AppConfig, Library};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "lms")]
#[command(about = "Catalog books and users and track loans")]
struct Args {
    /// Path to the library database
    #[arg(long, default_value = AppConfig::DEFAULT_DB_FILENAME)]
    db: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every book
    ListBooks,
    /// List every user
    ListUsers,
    /// Register a user
    AddUser {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Date of birth
        #[arg(long)]
        dob: String,
        #[arg(long)]
        address: String,
    },
    /// Catalog a book
    AddBook {
        #[arg(long)]
        name: String,
        #[arg(long)]
        author: String,
        /// Publication year
        #[arg(long)]
        year: String,
    },
    /// Add a tag to a book
    Tag {
        #[arg(long)]
        book: String,
        #[arg(long)]
        tag: String,
    },
    /// Lend a book to a user
    Borrow {
        #[arg(long)]
        user: String,
        #[arg(long)]
        book: String,
    },
    /// Take a book back from a user
    Return {
        #[arg(long)]
        user: String,
        #[arg(long)]
        book: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays clean for --json
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    debug!("Using database {}", args.db.display());
    let mut library = Library::builder(&args.db).build()?;

    let result = commands::run(&mut library, args.command, args.json);
    library.close();
    result
}
