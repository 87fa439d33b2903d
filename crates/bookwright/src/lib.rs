//! Bookwright - an editorial pipeline for drafting books with a hosted LLM.
//!
//! Editors keep books and chapters in PostgreSQL and steer the work by
//! editing a few status columns. Each run of the pipeline picks up where
//! they left off:
//!
//! - books with outline notes get an outline,
//! - books in the chapter stage get their next chapter drafted, rewritten
//!   from notes or approved, stopping at the first chapter that needs the
//!   editor,
//! - fully approved books are compiled into a Markdown manuscript.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use bookwright::{
//!     BookwrightConfig, FileSystemStorage, GroqGenerator, Pipeline, PostgresBookRepository,
//!     establish_connection, notifier_from_settings,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BookwrightConfig::load(None)?;
//!     let pipeline = Pipeline::new(
//!         Arc::new(PostgresBookRepository::new(establish_connection()?)),
//!         Arc::new(GroqGenerator::new(config.generator.clone())?),
//!         notifier_from_settings(&config.notify)?,
//!         Arc::new(FileSystemStorage::new(&config.output.dir)?),
//!     );
//!
//!     let report = pipeline.run().await?;
//!     println!("{} failures", report.failures());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `bookwright_core` - book and chapter records, status vocabularies
//! - `bookwright_error` - error types
//! - `bookwright_interface` - repository, generator and notifier traits
//! - `bookwright_database` - PostgreSQL repository
//! - `bookwright_models` - Groq generator over the OpenAI-compatible API
//! - `bookwright_notify` - webhook and log notifiers
//! - `bookwright_storage` - manuscript storage
//! - `bookwright_pipeline` - stage drivers and the chapter state machine
//!
//! This crate re-exports everything for convenience and adds the layered
//! [`BookwrightConfig`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;

pub use config::{BookwrightConfig, DEFAULT_CONFIG, ENV_PREFIX, OutputSettings};

pub use bookwright_core::*;
pub use bookwright_database::*;
pub use bookwright_error::*;
pub use bookwright_interface::*;
pub use bookwright_models::*;
pub use bookwright_notify::*;
pub use bookwright_pipeline::*;
pub use bookwright_storage::*;
