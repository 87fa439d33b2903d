//! Core data types for the Bookwright book production pipeline.
//!
//! This crate provides the records shared by every stage (books and chapters),
//! the status vocabularies persisted alongside them, and the request types
//! handed to content generators.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod book;
mod chapter;
mod request;
mod status;
mod telemetry;

pub use book::{BookProject, BookUpdate};
pub use chapter::{Chapter, ChapterState, ChapterUpdate, NewChapter};
pub use request::{ChapterRequest, ChapterRequestBuilder, OutlineRequest, OutlineRequestBuilder};
pub use status::{ChapterStatus, NotesStatus, OutlineStatus, OutputStatus, Stage, normalize};
pub use telemetry::init_telemetry;
