//! Storage backend boundary.
//!
//! The version-controlled working copy is an external collaborator; this
//! module only defines the contract the content engine consumes and a plain
//! filesystem implementation of it.

pub mod contract;
pub mod fs;

pub use contract::{DirEntry, StorageBackend};
pub use fs::FsStorage;
