//! The menus shown by the generate command

use super::Choice;
use crate::runtime::check::Language;

impl Choice for Language {
    const PROMPT: &'static str = "Select project extension:";

    fn options() -> &'static [Self] {
        &[Language::TypeScript, Language::JavaScript]
    }

    fn label(&self) -> &'static str {
        self.display_name()
    }
}

/// Which projects to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    FrontendOnly,
    BackendOnly,
    FullStack,
}

impl ProjectType {
    pub fn includes_frontend(&self) -> bool {
        matches!(self, ProjectType::FrontendOnly | ProjectType::FullStack)
    }

    pub fn includes_backend(&self) -> bool {
        matches!(self, ProjectType::BackendOnly | ProjectType::FullStack)
    }
}

impl Choice for ProjectType {
    const PROMPT: &'static str = "Select project type:";

    fn options() -> &'static [Self] {
        &[
            ProjectType::FrontendOnly,
            ProjectType::BackendOnly,
            ProjectType::FullStack,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            ProjectType::FrontendOnly => "Frontend only",
            ProjectType::BackendOnly => "Backend only",
            ProjectType::FullStack => "Full-stack (Frontend + Backend)",
        }
    }
}

/// Frontend frameworks, each created by its own external generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontendFramework {
    React,
    NextJs,
}

impl FrontendFramework {
    pub fn display_name(&self) -> &'static str {
        match self {
            FrontendFramework::React => "React",
            FrontendFramework::NextJs => "Next.js",
        }
    }

    /// Generator package run through the launcher
    pub fn generator_package(&self) -> &'static str {
        match self {
            FrontendFramework::React => "create-react-app",
            FrontendFramework::NextJs => "create-next-app",
        }
    }
}

impl Choice for FrontendFramework {
    const PROMPT: &'static str = "Select a frontend framework:";

    fn options() -> &'static [Self] {
        &[FrontendFramework::React, FrontendFramework::NextJs]
    }

    fn label(&self) -> &'static str {
        self.display_name()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendFramework {
    Express,
}

impl BackendFramework {
    pub fn display_name(&self) -> &'static str {
        match self {
            BackendFramework::Express => "Express",
        }
    }
}

impl Choice for BackendFramework {
    const PROMPT: &'static str = "Select a backend framework:";

    fn options() -> &'static [Self] {
        &[BackendFramework::Express]
    }

    fn label(&self) -> &'static str {
        match self {
            BackendFramework::Express => "Node.js with Express",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_type_parts() {
        assert!(ProjectType::FrontendOnly.includes_frontend());
        assert!(!ProjectType::FrontendOnly.includes_backend());
        assert!(ProjectType::BackendOnly.includes_backend());
        assert!(ProjectType::FullStack.includes_frontend());
        assert!(ProjectType::FullStack.includes_backend());
    }

    #[test]
    fn test_frontend_generators() {
        assert_eq!(FrontendFramework::React.generator_package(), "create-react-app");
        assert_eq!(FrontendFramework::NextJs.generator_package(), "create-next-app");
    }

    #[test]
    fn test_menu_order() {
        assert_eq!(Language::options()[0], Language::TypeScript);
        assert_eq!(ProjectType::options().len(), 3);
        assert_eq!(BackendFramework::options(), &[BackendFramework::Express]);
    }
}
