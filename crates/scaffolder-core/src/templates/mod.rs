//! Built-in templates and writing them to disk
//!
//! This module provides:
//! - The in-memory file manifest (`FileManifest`)
//! - The Express backend template
//! - Directory creation and manifest writing

pub mod express;
pub mod manifest;
pub mod writer;

pub use manifest::FileManifest;
pub use writer::{create_dirs, is_dir_empty, write_manifest};
