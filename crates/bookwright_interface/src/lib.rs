//! Collaborator traits for the Bookwright pipeline.
//!
//! The stage drivers depend only on these traits, so persistence, text
//! generation and notification delivery can be swapped independently
//! (PostgreSQL or in-memory storage, a hosted model or a scripted fake).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{BookRepository, ContentGenerator, Notifier};
