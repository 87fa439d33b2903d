//! Manuscript storage for Bookwright.
//!
//! Compiled manuscripts are handed to a [`ManuscriptStorage`] backend, which
//! persists the bytes under a file name and returns a reference carrying
//! the location, size and SHA-256 content hash.
//!
//! # Example
//!
//! ```rust
//! use bookwright_storage::{FileSystemStorage, ManuscriptMetadata, ManuscriptStorage};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = FileSystemStorage::new("/tmp/bookwright-out")?;
//! let metadata = ManuscriptMetadata::markdown("Tides.md");
//!
//! let reference = storage.store(b"# Tides\n", &metadata).await?;
//! assert_eq!(reference.size_bytes, 8);
//! assert_eq!(std::fs::read(&reference.storage_path)?, b"# Tides\n");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use bookwright_error::BookwrightResult;

mod filesystem;

pub use bookwright_error::{StorageError, StorageErrorKind};
pub use filesystem::FileSystemStorage;

/// MIME type of Markdown manuscripts.
pub const MARKDOWN_CONTENT_TYPE: &str = "text/markdown";

/// Trait for pluggable manuscript storage backends.
#[async_trait::async_trait]
pub trait ManuscriptStorage: Send + Sync {
    /// Store a manuscript, replacing any previous one with the same file name.
    async fn store(
        &self,
        data: &[u8],
        metadata: &ManuscriptMetadata,
    ) -> BookwrightResult<ManuscriptReference>;

    /// Backend name (e.g., "filesystem").
    fn backend_name(&self) -> &'static str;
}

/// Metadata about a manuscript being stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManuscriptMetadata {
    /// Target file name, without directories
    pub file_name: String,
    /// MIME type of the content
    pub content_type: String,
}

impl ManuscriptMetadata {
    /// Metadata for a Markdown manuscript.
    pub fn markdown(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: MARKDOWN_CONTENT_TYPE.to_string(),
        }
    }
}

/// Reference to a stored manuscript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManuscriptReference {
    /// SHA-256 hash of the content
    pub content_hash: String,
    /// Storage backend name
    pub storage_backend: String,
    /// Backend-specific location
    pub storage_path: String,
    /// Size of the content in bytes
    pub size_bytes: u64,
    /// MIME type of the content
    pub content_type: String,
}
