//! Filesystem-backed storage rooted at a working-copy directory.

use crate::error::StorageError;
use crate::storage::{DirEntry, StorageBackend};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Storage backend over a local directory, using `tokio::fs`.
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        if path.is_empty() {
            self.root.clone()
        } else {
            self.root.join(path)
        }
    }
}

fn map_io(path: &str, err: std::io::Error) -> StorageError {
    match err.kind() {
        ErrorKind::NotFound => StorageError::NotFound {
            path: path.to_string(),
        },
        ErrorKind::AlreadyExists => StorageError::AlreadyExists {
            path: path.to_string(),
        },
        _ => StorageError::Io {
            path: path.to_string(),
            source: err,
        },
    }
}

#[async_trait]
impl StorageBackend for FsStorage {
    async fn list_directory(&self, path: &str) -> Result<Vec<DirEntry>, StorageError> {
        let mut reader = tokio::fs::read_dir(self.resolve(path))
            .await
            .map_err(|e| map_io(path, e))?;

        let mut entries = Vec::new();
        while let Some(entry) = reader.next_entry().await.map_err(|e| map_io(path, e))? {
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    tracing::warn!("skipping non UTF-8 entry in '{}': {:?}", path, raw);
                    continue;
                }
            };
            let file_type = entry.file_type().await.map_err(|e| map_io(path, e))?;
            entries.push(DirEntry {
                name,
                is_directory: file_type.is_dir(),
            });
        }
        Ok(entries)
    }

    async fn create_directory(&self, path: &str) -> Result<(), StorageError> {
        tokio::fs::create_dir(self.resolve(path))
            .await
            .map_err(|e| map_io(path, e))
    }

    async fn create_file(&self, path: &str) -> Result<(), StorageError> {
        tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.resolve(path))
            .await
            .map(|_| ())
            .map_err(|e| map_io(path, e))
    }

    async fn write_file(&self, path: &str, contents: &str) -> Result<(), StorageError> {
        tokio::fs::write(self.resolve(path), contents)
            .await
            .map_err(|e| map_io(path, e))
    }

    async fn rename_file(&self, from: &str, to: &str) -> Result<(), StorageError> {
        let destination = self.resolve(to);
        // The OS rename would silently replace an existing destination.
        match tokio::fs::metadata(&destination).await {
            Ok(_) => {
                return Err(StorageError::AlreadyExists {
                    path: to.to_string(),
                })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(map_io(to, e)),
        }
        tokio::fs::rename(self.resolve(from), destination)
            .await
            .map_err(|e| map_io(from, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage() -> (TempDir, FsStorage) {
        let temp_dir = TempDir::new().unwrap();
        let storage = FsStorage::new(temp_dir.path());
        (temp_dir, storage)
    }

    #[tokio::test]
    async fn list_directory_reports_files_and_directories() {
        let (temp_dir, storage) = storage();
        std::fs::create_dir(temp_dir.path().join("_posts")).unwrap();
        std::fs::write(temp_dir.path().join("index.html"), "").unwrap();

        let mut entries = storage.list_directory("").await.unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(
            entries,
            vec![
                DirEntry {
                    name: "_posts".to_string(),
                    is_directory: true
                },
                DirEntry {
                    name: "index.html".to_string(),
                    is_directory: false
                },
            ]
        );
    }

    #[tokio::test]
    async fn list_directory_fails_on_missing_path() {
        let (_temp_dir, storage) = storage();
        let err = storage.list_directory("nowhere").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound { .. }));
    }

    #[tokio::test]
    async fn create_file_refuses_existing_path() {
        let (_temp_dir, storage) = storage();
        storage.create_file("a.md").await.unwrap();
        let err = storage.create_file("a.md").await.unwrap_err();
        assert!(matches!(err, StorageError::AlreadyExists { .. }));
    }

    #[tokio::test]
    async fn rename_refuses_existing_destination() {
        let (_temp_dir, storage) = storage();
        storage.create_file("a.md").await.unwrap();
        storage.create_file("b.md").await.unwrap();
        let err = storage.rename_file("a.md", "b.md").await.unwrap_err();
        assert!(matches!(err, StorageError::AlreadyExists { .. }));
    }

    #[tokio::test]
    async fn rename_moves_content() {
        let (temp_dir, storage) = storage();
        storage.create_file("a.md").await.unwrap();
        storage.write_file("a.md", "body").await.unwrap();
        storage.rename_file("a.md", "b.md").await.unwrap();

        assert!(!temp_dir.path().join("a.md").exists());
        assert_eq!(
            std::fs::read_to_string(temp_dir.path().join("b.md")).unwrap(),
            "body"
        );
    }
}
