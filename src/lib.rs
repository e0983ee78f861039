//! Hyde: convention-driven Jekyll content management.
//!
//! Maintains an immutable in-memory tree mirroring a version-controlled
//! working directory and classifies posts and drafts purely from file
//! location and filename shape, without reading file contents.

pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod storage;
pub mod tree;
