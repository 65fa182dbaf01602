//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface a CLI binary implements to configure
//! the scaffolding behavior for its product.

use crate::runtime::check::Language;
use std::path::Path;

/// Configuration trait for scaffolding CLI products
///
/// Each product implements this trait to define:
/// - Product identity (display name)
/// - The runtime that must be present before anything is generated
/// - Where generated projects go
/// - Which launcher runs external generators
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Binary the dependency check looks up on PATH
    fn runtime_binary(&self) -> &'static str {
        "node"
    }

    /// Human-readable runtime name
    fn runtime_name(&self) -> &'static str {
        "Node.js"
    }

    /// Where users can download the runtime
    fn runtime_install_url(&self) -> &'static str;

    /// Directory name of the generated frontend project
    fn frontend_project_name(&self) -> &'static str {
        "frontend"
    }

    /// Directory name of the generated backend project
    fn backend_project_name(&self) -> &'static str {
        "backend"
    }

    /// Program that launches external generators
    fn default_launcher(&self) -> &'static str {
        "npx"
    }

    /// Environment variable name for overriding the launcher
    fn launcher_env(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, projects: &[&Path], language: Language) -> Vec<String>;
}
