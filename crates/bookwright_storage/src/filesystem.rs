//! Filesystem-based manuscript storage.

use crate::{ManuscriptMetadata, ManuscriptReference, ManuscriptStorage};
use bookwright_error::{BookwrightResult, StorageError, StorageErrorKind};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Filesystem storage backend.
///
/// Writes each manuscript to `{base_path}/{file_name}`. Writes go to a
/// temporary file first and are renamed into place.
pub struct FileSystemStorage {
    base_path: PathBuf,
}

impl FileSystemStorage {
    /// Create a new filesystem storage backend.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> BookwrightResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::debug!(path = %base_path.display(), "Opened filesystem storage");
        Ok(Self { base_path })
    }

    /// Root directory of this backend.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn compute_hash(data: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data);
        format!("{:x}", hasher.finalize())
    }

    /// Resolve a file name inside the base directory, rejecting anything
    /// that would escape it.
    fn get_path(&self, file_name: &str) -> BookwrightResult<PathBuf> {
        let invalid = file_name.is_empty()
            || file_name == "."
            || file_name == ".."
            || file_name.contains(['/', '\\']);
        if invalid {
            return Err(StorageError::new(StorageErrorKind::InvalidPath(file_name.to_string())).into());
        }
        Ok(self.base_path.join(file_name))
    }
}

#[async_trait::async_trait]
impl ManuscriptStorage for FileSystemStorage {
    #[tracing::instrument(skip(self, data, metadata), fields(size = data.len(), file_name = %metadata.file_name))]
    async fn store(
        &self,
        data: &[u8],
        metadata: &ManuscriptMetadata,
    ) -> BookwrightResult<ManuscriptReference> {
        let path = self.get_path(&metadata.file_name)?;
        let hash = Self::compute_hash(data);

        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::info!(
            hash = %hash,
            path = %path.display(),
            size = data.len(),
            "Stored manuscript"
        );

        Ok(ManuscriptReference {
            content_hash: hash,
            storage_backend: self.backend_name().to_string(),
            storage_path: path.to_string_lossy().to_string(),
            size_bytes: data.len() as u64,
            content_type: metadata.content_type.clone(),
        })
    }

    fn backend_name(&self) -> &'static str {
        "filesystem"
    }
}
