//! Content-tree node types.

use std::collections::BTreeMap;

/// File node, identified by its root-relative path. Identity is immutable
/// after construction; a rename produces a new node in the next snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    pub path: String,
}

impl FileNode {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Final path segment.
    pub fn name(&self) -> &str {
        leaf_name(&self.path)
    }
}

/// Directory node owning its immediate children, keyed by name.
///
/// `BTreeMap` gives a deterministic iteration order regardless of the order
/// the backend listed the entries in, which keeps sort ties in the listing
/// layer stable across rebuilds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    pub path: String,
    pub children: BTreeMap<String, Node>,
}

impl DirectoryNode {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            children: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        leaf_name(&self.path)
    }

    /// Immediate child by name; absence is `None`, never an error.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    /// Immediate file children, in name order.
    pub fn files(&self) -> impl Iterator<Item = &FileNode> {
        self.children.values().filter_map(|node| match node {
            Node::File(file) => Some(file),
            Node::Directory(_) => None,
        })
    }
}

/// A node of one tree snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory(DirectoryNode),
    File(FileNode),
}

impl Node {
    pub fn path(&self) -> &str {
        match self {
            Node::Directory(dir) => &dir.path,
            Node::File(file) => &file.path,
        }
    }

    pub fn name(&self) -> &str {
        leaf_name(self.path())
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }
}

/// Final segment of a forward-slash path; the whole path when it has none.
pub fn leaf_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Join a parent path and a child name. The empty parent is the tree root.
pub fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}
