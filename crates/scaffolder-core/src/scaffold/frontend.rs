//! Frontend generation by delegation to an external generator

use super::{ScaffoldReport, Target};
use crate::config::GenerateConfig;
use crate::error::{Result, ScaffoldError};
use crate::prompt::FrontendFramework;
use crate::runtime::tool::{ToolConfig, ToolManager};
use crate::templates::writer;
use std::path::PathBuf;

/// Creates a frontend project with the framework's own generator.
///
/// The target directory must be empty; nothing is ever merged into existing
/// content. All files are written by the external generator.
pub struct FrontendGenerator {
    framework: FrontendFramework,
    base_dir: PathBuf,
    project: String,
    tool: ToolManager,
}

impl FrontendGenerator {
    pub fn new(config: &GenerateConfig, framework: FrontendFramework) -> Self {
        let tool = ToolManager::new(ToolConfig {
            launcher: config.launcher.clone(),
            package: framework.generator_package(),
        });

        Self {
            framework,
            base_dir: config.base_dir.clone(),
            project: config.frontend_name.clone(),
            tool,
        }
    }

    pub fn root(&self) -> PathBuf {
        self.base_dir.join(&self.project)
    }

    pub fn generate(&self) -> Result<ScaffoldReport> {
        let root = self.root();

        writer::create_dirs(&self.base_dir, &[self.project.as_str()])?;
        if !writer::is_dir_empty(&root)? {
            return Err(ScaffoldError::DirectoryNotEmpty {
                path: PathBuf::from(&self.project),
            });
        }

        self.tool.run(&self.base_dir, &self.project)?;

        Ok(ScaffoldReport {
            target: Target::Frontend(self.framework),
            project: self.project.clone(),
            root,
            created_dirs: Vec::new(),
            created_files: Vec::new(),
            delegated_to: Some(self.tool.command_line(&self.project)),
        })
    }
}
