//! External generator tools
//!
//! Frontend projects are created entirely by third-party generators such as
//! `create-react-app`, run through a package launcher (`npx` by default).
//! The child shares this process's terminal and we block until it exits.

use crate::error::{Result, ScaffoldError};
use std::path::Path;
use std::process::{Command, Stdio};

/// Configuration for an external generator tool
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Program used to launch the generator (e.g., "npx")
    pub launcher: String,
    /// Generator package handed to the launcher (e.g., "create-react-app")
    pub package: &'static str,
}

/// Runs an external generator with inherited stdio
pub struct ToolManager {
    config: ToolConfig,
}

impl ToolManager {
    /// Create a new tool manager with the given configuration
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    /// The full command line, for display
    pub fn command_line(&self, target: &str) -> String {
        format!("{} {} {}", self.config.launcher, self.config.package, target)
    }

    /// Run `<launcher> <package> <target>` from `working_dir` and wait for it
    pub fn run(&self, working_dir: &Path, target: &str) -> Result<()> {
        let status = Command::new(&self.config.launcher)
            .arg(self.config.package)
            .arg(target)
            .current_dir(working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| ScaffoldError::GeneratorLaunch {
                program: self.config.launcher.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ScaffoldError::GeneratorFailed {
                program: self.command_line(target),
                code: status.code(),
            })
        }
    }
}
