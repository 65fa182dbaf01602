//! Generation configuration
//!
//! Everything a generation run depends on is carried here explicitly and
//! handed to the generators; there is no process-wide state. The language is
//! not part of it: each backend target carries the one chosen from the menu.

pub mod generator;

use crate::product::ProductConfig;
use std::path::PathBuf;

/// Settings for one generation run
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Directory the projects are created in
    pub base_dir: PathBuf,
    /// Program used to launch external frontend generators
    pub launcher: String,
    pub frontend_name: String,
    pub backend_name: String,
}

impl GenerateConfig {
    /// Build a config for `base_dir` using the product's defaults
    pub fn from_product<C: ProductConfig>(config: &C, base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            launcher: generator::resolve_launcher(config),
            frontend_name: config.frontend_project_name().to_string(),
            backend_name: config.backend_project_name().to_string(),
        }
    }

    /// Config with stock names and the `npx` launcher
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            launcher: "npx".to_string(),
            frontend_name: "frontend".to_string(),
            backend_name: "backend".to_string(),
        }
    }

    pub fn with_launcher(mut self, launcher: impl Into<String>) -> Self {
        self.launcher = launcher.into();
        self
    }

    pub fn frontend_dir(&self) -> PathBuf {
        self.base_dir.join(&self.frontend_name)
    }

    pub fn backend_dir(&self) -> PathBuf {
        self.base_dir.join(&self.backend_name)
    }
}
