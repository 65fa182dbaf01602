//! Project generation
//!
//! A [`ProjectScaffolder`] turns a [`Target`] into files on disk. The real
//! implementation is [`FsScaffolder`]; the workflow only sees the trait, so
//! tests can record calls instead of touching the filesystem or spawning
//! generators.

pub mod backend;
pub mod frontend;

use crate::config::GenerateConfig;
use crate::error::Result;
use crate::prompt::{BackendFramework, FrontendFramework};
use crate::runtime::check::Language;
use std::path::PathBuf;

pub use backend::BackendGenerator;
pub use frontend::FrontendGenerator;

/// A project to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Frontend(FrontendFramework),
    Backend {
        framework: BackendFramework,
        language: Language,
    },
}

impl Target {
    pub fn display_name(&self) -> &'static str {
        match self {
            Target::Frontend(framework) => framework.display_name(),
            Target::Backend { framework, .. } => framework.display_name(),
        }
    }
}

/// What a generation produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub target: Target,
    /// Project directory name, relative to the base directory
    pub project: String,
    pub root: PathBuf,
    pub created_dirs: Vec<PathBuf>,
    pub created_files: Vec<PathBuf>,
    /// External command that generated the project, if delegated
    pub delegated_to: Option<String>,
}

/// Capability to generate a project for a target
pub trait ProjectScaffolder {
    fn scaffold(&mut self, target: &Target) -> Result<ScaffoldReport>;
}

/// Generates projects on the real filesystem
pub struct FsScaffolder {
    config: GenerateConfig,
}

impl FsScaffolder {
    pub fn new(config: GenerateConfig) -> Self {
        Self { config }
    }
}

impl ProjectScaffolder for FsScaffolder {
    fn scaffold(&mut self, target: &Target) -> Result<ScaffoldReport> {
        match *target {
            Target::Frontend(framework) => {
                FrontendGenerator::new(&self.config, framework).generate()
            }
            Target::Backend {
                framework,
                language,
            } => BackendGenerator::new(&self.config, framework, language).generate(),
        }
    }
}
