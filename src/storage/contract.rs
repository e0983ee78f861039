use crate::error::StorageError;
use async_trait::async_trait;

/// One entry of a directory listing. Order is not significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_directory: bool,
}

/// Boundary to the storage engine holding the working copy.
///
/// Paths are forward-slash separated and relative to the backend root; the
/// empty string addresses the root itself. Every call is a single-shot async
/// task producing exactly one result or one failure, never a stream, and
/// must not be assumed to complete synchronously.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// List the immediate entries of a directory.
    async fn list_directory(&self, path: &str) -> Result<Vec<DirEntry>, StorageError>;

    /// Create a directory. Fails with `AlreadyExists` if the path is taken.
    async fn create_directory(&self, path: &str) -> Result<(), StorageError>;

    /// Create an empty file. Fails with `AlreadyExists` if the path is taken
    /// and `NotFound` if the parent directory is missing.
    async fn create_file(&self, path: &str) -> Result<(), StorageError>;

    /// Replace the contents of a file.
    async fn write_file(&self, path: &str, contents: &str) -> Result<(), StorageError>;

    /// Rename a file as a single atomic operation at the storage layer.
    /// Fails if the source is absent or the destination already exists.
    async fn rename_file(&self, from: &str, to: &str) -> Result<(), StorageError>;
}
