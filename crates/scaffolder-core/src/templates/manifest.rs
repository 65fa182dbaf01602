//! In-memory file manifest: destination path to literal content

use crate::error::{Result, ScaffoldError};
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

/// Files to write for one generation run, keyed by path relative to the
/// project root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileManifest {
    entries: BTreeMap<PathBuf, String>,
}

impl FileManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file. The path must be relative, must not leave the project
    /// root, and must not already be present.
    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Result<()> {
        let path = path.into();
        if !is_contained(&path) {
            return Err(ScaffoldError::ManifestPath { path });
        }
        if self.entries.contains_key(&path) {
            return Err(ScaffoldError::DuplicateEntry { path });
        }
        self.entries.insert(path, content.into());
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Result<Self> {
        self.insert(path, content)?;
        Ok(self)
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.entries.get(path.as_ref()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.entries
            .iter()
            .map(|(path, content)| (path.as_path(), content.as_str()))
    }
}

/// True for non-empty relative paths made only of normal components
fn is_contained(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        && path.components().any(|c| matches!(c, Component::Normal(_)))
}
