//! Error taxonomy for the content engine.
//!
//! Classification never fails: a filename that does not match a grammar is
//! non-membership, resolved inside `content::classify` and never surfaced
//! here. Only storage-backend failures and configuration problems reach the
//! caller.

use thiserror::Error;

/// Failures at the storage-backend boundary.
///
/// `AlreadyExists` is kept as its own variant so callers can distinguish a
/// precondition failure (creating over an existing file, renaming onto a
/// taken path) from a plain I/O failure and offer a rename/overwrite choice.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("path not found: {path}")]
    NotFound { path: String },

    #[error("path already exists: {path}")]
    AlreadyExists { path: String },

    #[error("i/o failure at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error for content-manager operations.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("configuration error: {0}")]
    Config(String),
}
