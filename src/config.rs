//! Content engine configuration.
//!
//! All fields are defaulted so an empty TOML document yields a working
//! configuration; a config file only overrides what it names.

use crate::content::front_matter;
use crate::error::ContentError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Directory names and templating for one Jekyll working copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Well-known posts directory, relative to the working-copy root.
    #[serde(default = "default_posts_dir")]
    pub posts_dir: String,

    /// Well-known drafts directory, relative to the working-copy root.
    #[serde(default = "default_drafts_dir")]
    pub drafts_dir: String,

    /// Front matter written into newly created files; `{title}` is replaced
    /// with the entry title, the rest is opaque text.
    #[serde(default = "default_front_matter_template")]
    pub front_matter_template: String,
}

fn default_posts_dir() -> String {
    "_posts".to_string()
}

fn default_drafts_dir() -> String {
    "_drafts".to_string()
}

fn default_front_matter_template() -> String {
    front_matter::DEFAULT_TEMPLATE.to_string()
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            posts_dir: default_posts_dir(),
            drafts_dir: default_drafts_dir(),
            front_matter_template: default_front_matter_template(),
        }
    }
}

impl ContentConfig {
    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ContentError::Config(format!("failed to read config {}: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            ContentError::Config(format!("failed to parse config {}: {}", path.display(), e))
        })
    }
}
