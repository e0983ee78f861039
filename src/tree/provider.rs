//! On-demand tree snapshots from the storage backend.

use crate::error::ContentError;
use crate::storage::{DirEntry, StorageBackend};
use crate::tree::node::{self, DirectoryNode, FileNode, Node};
use crate::tree::Tree;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

/// Builds complete `Tree` snapshots by recursively listing the backend.
///
/// All or nothing: either every listing succeeds and one immutable tree is
/// returned, or the first backend failure aborts the build and no partial
/// tree escapes.
#[derive(Clone)]
pub struct TreeProvider {
    storage: Arc<dyn StorageBackend>,
}

impl TreeProvider {
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self { storage }
    }

    /// Produce a fresh snapshot of the whole working directory.
    pub async fn snapshot(&self) -> Result<Arc<Tree>, ContentError> {
        // Phase one: breadth-first listing into a table keyed by directory
        // path. Listing order from the backend is irrelevant.
        let mut listings: HashMap<String, Vec<DirEntry>> = HashMap::new();
        let mut pending = VecDeque::from([String::new()]);
        while let Some(dir) = pending.pop_front() {
            let entries = self.storage.list_directory(&dir).await?;
            for entry in &entries {
                if entry.is_directory {
                    pending.push_back(node::join(&dir, &entry.name));
                }
            }
            listings.insert(dir, entries);
        }

        // Phase two: single top-down build from the completed table.
        let root = build_directory(String::new(), &listings);
        Ok(Arc::new(Tree::new(root)))
    }
}

fn build_directory(path: String, listings: &HashMap<String, Vec<DirEntry>>) -> DirectoryNode {
    let mut dir = DirectoryNode::new(path);
    if let Some(entries) = listings.get(&dir.path) {
        for entry in entries {
            let child_path = node::join(&dir.path, &entry.name);
            let child = if entry.is_directory {
                Node::Directory(build_directory(child_path, listings))
            } else {
                Node::File(FileNode::new(child_path))
            };
            dir.children.insert(entry.name.clone(), child);
        }
    }
    dir
}
