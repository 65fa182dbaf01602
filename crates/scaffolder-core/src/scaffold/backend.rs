//! Backend generation from the built-in Express template

use super::{ScaffoldReport, Target};
use crate::config::GenerateConfig;
use crate::error::Result;
use crate::prompt::BackendFramework;
use crate::runtime::check::Language;
use crate::templates::{express, writer};
use std::path::PathBuf;

/// Writes the Express project layout and its two template files
pub struct BackendGenerator {
    framework: BackendFramework,
    language: Language,
    root: PathBuf,
    project: String,
}

impl BackendGenerator {
    pub fn new(config: &GenerateConfig, framework: BackendFramework, language: Language) -> Self {
        Self {
            framework,
            language,
            root: config.backend_dir(),
            project: config.backend_name.clone(),
        }
    }

    pub fn generate(&self) -> Result<ScaffoldReport> {
        let (dirs, manifest) = match self.framework {
            BackendFramework::Express => (express::SOURCE_DIRS, express::manifest(self.language)?),
        };

        let created_dirs = writer::create_dirs(&self.root, dirs)?;
        let created_files = writer::write_manifest(&self.root, &manifest)?;

        Ok(ScaffoldReport {
            target: Target::Backend {
                framework: self.framework,
                language: self.language,
            },
            project: self.project.clone(),
            root: self.root.clone(),
            created_dirs,
            created_files,
            delegated_to: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use walkdir::WalkDir;

    fn generate(base: &Path, language: Language) -> Result<ScaffoldReport> {
        let config = GenerateConfig::new(base);
        BackendGenerator::new(&config, BackendFramework::Express, language).generate()
    }

    /// Relative paths of every directory and file under `root`
    fn tree(root: &Path) -> (Vec<String>, Vec<String>) {
        let mut dirs = Vec::new();
        let mut files = Vec::new();
        for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
            let entry = entry.unwrap();
            let relative = entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            if entry.file_type().is_dir() {
                dirs.push(relative);
            } else {
                files.push(relative);
            }
        }
        (dirs, files)
    }

    #[test]
    fn test_typescript_layout() {
        let temp = tempfile::tempdir().unwrap();
        let report = generate(temp.path(), Language::TypeScript).unwrap();

        let (dirs, files) = tree(&temp.path().join("backend"));
        assert_eq!(dirs, vec!["src", "src/controllers", "src/models", "src/routes"]);
        assert_eq!(files, vec!["package.json", "src/index.ts"]);
        assert_eq!(report.created_dirs.len(), 3);
        assert_eq!(report.created_files.len(), 2);
    }

    #[test]
    fn test_javascript_layout() {
        let temp = tempfile::tempdir().unwrap();
        generate(temp.path(), Language::JavaScript).unwrap();

        let (_, files) = tree(&temp.path().join("backend"));
        assert_eq!(files, vec!["package.json", "src/index.js"]);
    }

    #[test]
    fn test_generated_contents() {
        let temp = tempfile::tempdir().unwrap();
        generate(temp.path(), Language::JavaScript).unwrap();

        let root = temp.path().join("backend");
        let app = fs::read_to_string(root.join("src/index.js")).unwrap();
        assert_eq!(app, express::SAMPLE_APP);

        let package: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(root.join("package.json")).unwrap()).unwrap();
        assert_eq!(package["dependencies"]["express"], "^4.17.1");
    }

    #[test]
    fn test_directory_failure_leaves_no_files() {
        let temp = tempfile::tempdir().unwrap();
        // A file where the project directory should go
        fs::write(temp.path().join("backend"), "").unwrap();

        let err = generate(temp.path(), Language::JavaScript).unwrap_err();
        assert!(matches!(err, crate::error::ScaffoldError::CreateDir { .. }));
        assert!(temp.path().join("backend").is_file());
    }
}
