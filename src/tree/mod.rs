//! In-memory content tree: immutable snapshots of a working directory.
//!
//! A snapshot is built once, top-down, and never mutated afterwards; readers
//! share it through an `Arc` and can traverse it concurrently without
//! locking. Prior snapshots stay valid for in-flight readers after a rebuild.

pub mod node;
pub mod provider;

pub use node::{DirectoryNode, FileNode, Node};
pub use provider::TreeProvider;

use std::collections::HashMap;

/// One immutable, fully built snapshot of the working directory.
///
/// The parent index is a non-owning lookup from a node's path to its parent
/// directory's path; ownership flows strictly root-to-leaf through the
/// children maps, so there are no ownership cycles to break.
#[derive(Debug)]
pub struct Tree {
    root: DirectoryNode,
    parents: HashMap<String, String>,
}

impl Tree {
    pub(crate) fn new(root: DirectoryNode) -> Self {
        let mut parents = HashMap::new();
        index_parents(&root, &mut parents);
        Self { root, parents }
    }

    pub fn root(&self) -> &DirectoryNode {
        &self.root
    }

    /// Resolve a root-relative path to a node. The empty path is the root
    /// directory itself, which is not addressable as a `Node`.
    pub fn node_at(&self, path: &str) -> Option<&Node> {
        let mut segments = path.split('/');
        let first = segments.next()?;
        let mut current = self.root.child(first)?;
        for segment in segments {
            match current {
                Node::Directory(dir) => current = dir.child(segment)?,
                Node::File(_) => return None,
            }
        }
        Some(current)
    }

    /// Resolve a path to a directory node; the empty path is the root.
    pub fn directory_at(&self, path: &str) -> Option<&DirectoryNode> {
        if path.is_empty() {
            return Some(&self.root);
        }
        match self.node_at(path)? {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }

    /// Resolve a path to a file node.
    pub fn file_at(&self, path: &str) -> Option<&FileNode> {
        match self.node_at(path)? {
            Node::File(file) => Some(file),
            Node::Directory(_) => None,
        }
    }

    /// Path of the parent directory of a node; `None` for the root and for
    /// paths not in this snapshot.
    pub fn parent_of(&self, path: &str) -> Option<&str> {
        self.parents.get(path).map(String::as_str)
    }

    /// Walk from a node up through its ancestors, returning true iff the
    /// node itself or any ancestor is named `dir_name`. Supports nested
    /// sub-directories of the well-known areas.
    pub fn is_under(&self, path: &str, dir_name: &str) -> bool {
        let mut current = path;
        loop {
            if !current.is_empty() && node::leaf_name(current) == dir_name {
                return true;
            }
            match self.parent_of(current) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }
}

fn index_parents(dir: &DirectoryNode, parents: &mut HashMap<String, String>) {
    for child in dir.children.values() {
        parents.insert(child.path().to_string(), dir.path.clone());
        if let Node::Directory(subdir) = child {
            index_parents(subdir, parents);
        }
    }
}
