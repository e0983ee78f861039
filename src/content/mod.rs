//! Content orchestration: listing, creation, and publish state transitions.
//!
//! A logical entry has two states, draft and post; `publish` and `unpublish`
//! move between them through a single backend rename with no intermediate
//! state. Entries are derived from one tree snapshot and must be re-resolved
//! against a fresh snapshot after any mutation before mutating again.

pub mod classify;
pub mod front_matter;

pub use classify::{Area, Classification, Draft, Post};

use crate::config::ContentConfig;
use crate::error::{ContentError, StorageError};
use crate::storage::StorageBackend;
use crate::tree::{node, FileNode, Tree, TreeProvider};
use chrono::Local;
use std::sync::Arc;

/// Orchestrates classified content over one working copy.
///
/// Every operation that touches the backend is a single-shot async task; no
/// queue or lock is layered over the backend, so two concurrent mutations
/// race and are resolved by re-querying after a result is observed.
pub struct ContentManager {
    storage: Arc<dyn StorageBackend>,
    provider: TreeProvider,
    config: ContentConfig,
}

impl ContentManager {
    pub fn new(storage: Arc<dyn StorageBackend>, config: ContentConfig) -> Self {
        let provider = TreeProvider::new(storage.clone());
        Self {
            storage,
            provider,
            config,
        }
    }

    pub fn provider(&self) -> &TreeProvider {
        &self.provider
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// All posts, newest first; same-day posts keep their listing order.
    /// A missing posts directory is an empty result, not a failure.
    pub async fn list_posts(&self) -> Result<Vec<Post>, ContentError> {
        let tree = self.provider.snapshot().await?;
        let Some(dir) = tree.directory_at(&self.config.posts_dir) else {
            return Ok(Vec::new());
        };
        let mut posts: Vec<Post> = dir.files().filter_map(classify::parse_post).collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(posts)
    }

    /// All drafts sorted by title.
    pub async fn list_drafts(&self) -> Result<Vec<Draft>, ContentError> {
        let tree = self.provider.snapshot().await?;
        let Some(dir) = tree.directory_at(&self.config.drafts_dir) else {
            return Ok(Vec::new());
        };
        let mut drafts: Vec<Draft> = dir.files().filter_map(classify::parse_draft).collect();
        drafts.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(drafts)
    }

    /// Create a post in the well-known posts directory, dated today.
    pub async fn create_post(&self, title: &str) -> Result<Post, ContentError> {
        let dir = self.config.posts_dir.clone();
        self.create_post_in(title, &dir).await
    }

    /// Create a post in an explicitly chosen directory.
    pub async fn create_post_in(&self, title: &str, dir: &str) -> Result<Post, ContentError> {
        self.ensure_directory(dir).await;
        let date = Local::now().date_naive();
        let path = node::join(dir, &classify::post_filename(title, date));
        self.create_with_front_matter(&path, title).await?;
        Ok(Post {
            title: title.to_string(),
            date,
            file: FileNode::new(path),
        })
    }

    /// Create a draft in the well-known drafts directory.
    pub async fn create_draft(&self, title: &str) -> Result<Draft, ContentError> {
        let dir = self.config.drafts_dir.clone();
        self.create_draft_in(title, &dir).await
    }

    /// Create a draft in an explicitly chosen directory.
    pub async fn create_draft_in(&self, title: &str, dir: &str) -> Result<Draft, ContentError> {
        self.ensure_directory(dir).await;
        let path = node::join(dir, &classify::draft_filename(title));
        self.create_with_front_matter(&path, title).await?;
        Ok(Draft {
            title: title.to_string(),
            file: FileNode::new(path),
        })
    }

    /// Move a draft into the posts area under a date-prefixed name, using the
    /// current date. The rename is atomic at the storage layer.
    pub async fn publish(&self, draft: &Draft) -> Result<Post, ContentError> {
        let date = Local::now().date_naive();
        let destination = node::join(
            &self.config.posts_dir,
            &classify::post_filename(&draft.title, date),
        );
        self.storage
            .rename_file(&draft.file.path, &destination)
            .await?;
        Ok(Post {
            title: draft.title.clone(),
            date,
            file: FileNode::new(destination),
        })
    }

    /// Move a post back into the drafts area, discarding the date prefix.
    pub async fn unpublish(&self, post: &Post) -> Result<Draft, ContentError> {
        let destination = node::join(
            &self.config.drafts_dir,
            &classify::draft_filename(&post.title),
        );
        self.storage
            .rename_file(&post.file.path, &destination)
            .await?;
        Ok(Draft {
            title: post.title.clone(),
            file: FileNode::new(destination),
        })
    }

    /// True if the directory is the posts area or lies anywhere inside it.
    pub fn is_posts_dir_or_subdir(&self, tree: &Tree, path: &str) -> bool {
        tree.is_under(path, &self.config.posts_dir)
    }

    /// True if the directory is the drafts area or lies anywhere inside it.
    pub fn is_drafts_dir_or_subdir(&self, tree: &Tree, path: &str) -> bool {
        tree.is_under(path, &self.config.drafts_dir)
    }

    /// Directory creation is best effort: an existing directory is fine, and
    /// any other failure is left for the subsequent file write to surface.
    async fn ensure_directory(&self, dir: &str) {
        if let Err(e) = self.storage.create_directory(dir).await {
            match e {
                StorageError::AlreadyExists { .. } => {}
                other => tracing::warn!("failed to create directory '{}': {}", dir, other),
            }
        }
    }

    async fn create_with_front_matter(&self, path: &str, title: &str) -> Result<(), ContentError> {
        self.storage.create_file(path).await?;
        let body = front_matter::render(&self.config.front_matter_template, title);
        self.storage.write_file(path, &body).await?;
        Ok(())
    }
}
