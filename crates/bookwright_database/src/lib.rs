//! PostgreSQL persistence for Bookwright.
//!
//! This crate provides the Diesel schema, row models and a
//! [`BookRepository`](bookwright_interface::BookRepository) implementation
//! backed by PostgreSQL.
//!
//! # Example
//!
//! ```rust,ignore
//! use bookwright_database::{establish_connection, run_migrations, PostgresBookRepository};
//!
//! let mut conn = establish_connection()?;
//! run_migrations(&mut conn)?;
//! let repo = PostgresBookRepository::new(conn);
//! ```

mod connection;
mod conversions;
mod models;
mod repository;

pub mod schema;

pub use connection::{connect, establish_connection, run_migrations};
pub use conversions::{
    book_update_to_changeset, chapter_update_to_changeset, new_chapter_to_row, row_to_book,
    row_to_chapter,
};
pub use models::{BookProjectChangeset, BookProjectRow, ChapterChangeset, ChapterRow, NewChapterRow};
pub use repository::PostgresBookRepository;

pub use bookwright_error::{DatabaseError, DatabaseErrorKind};

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;
