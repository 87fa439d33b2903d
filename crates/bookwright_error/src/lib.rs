//! Error types for the Bookwright library.
//!
//! This crate provides the foundation error types used throughout the Bookwright workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use bookwright_error::{BookwrightResult, ConfigError};
//!
//! fn load() -> BookwrightResult<String> {
//!     Err(ConfigError::new("missing [generator] section"))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod database;
mod error;
mod generation;
mod notify;
mod pipeline;
mod storage;

pub use config::ConfigError;
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{BookwrightError, BookwrightErrorKind, BookwrightResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use notify::NotifyError;
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use storage::{StorageError, StorageErrorKind};
