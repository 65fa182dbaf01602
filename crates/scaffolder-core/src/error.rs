//! Error types for scaffolding operations
//!
//! Every variant is fatal to a generation run. Invalid menu input is not an
//! error: the prompt engine re-asks instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while checking prerequisites, prompting, or generating projects
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("{name} is not installed.\nPlease install {name} from {install_url}")]
    MissingRuntime {
        name: &'static str,
        install_url: &'static str,
    },

    #[error("Input closed before a valid option was selected")]
    InputClosed,

    #[error(
        "Directory {} contains files that could conflict. Please use an empty directory.",
        path.display()
    )]
    DirectoryNotEmpty { path: PathBuf },

    #[error("Failed to launch {program}: {source}")]
    GeneratorLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {}", exit_label(*code))]
    GeneratorFailed { program: String, code: Option<i32> },

    #[error("Error creating directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error creating file {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Manifest path must be relative and stay inside the project: {}", path.display())]
    ManifestPath { path: PathBuf },

    #[error("Manifest already contains an entry for {}", path.display())]
    DuplicateEntry { path: PathBuf },

    #[error("Invalid dependency version requirement: {0}")]
    Version(#[from] semver::Error),

    #[error("Failed to render {file}: {source}")]
    Render {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn exit_label(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Result alias for scaffolding operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_runtime_message_includes_install_url() {
        let err = ScaffoldError::MissingRuntime {
            name: "Node.js",
            install_url: "https://nodejs.org/en/download/",
        };
        let message = err.to_string();
        assert!(message.contains("Node.js is not installed."));
        assert!(message.contains("https://nodejs.org/en/download/"));
    }

    #[test]
    fn test_directory_not_empty_message() {
        let err = ScaffoldError::DirectoryNotEmpty {
            path: PathBuf::from("frontend"),
        };
        assert_eq!(
            err.to_string(),
            "Directory frontend contains files that could conflict. Please use an empty directory."
        );
    }

    #[test]
    fn test_generator_failed_reports_exit_code() {
        let err = ScaffoldError::GeneratorFailed {
            program: "npx".to_string(),
            code: Some(2),
        };
        assert_eq!(err.to_string(), "npx exited with exit code 2");

        let killed = ScaffoldError::GeneratorFailed {
            program: "npx".to_string(),
            code: None,
        };
        assert!(killed.to_string().contains("terminated by signal"));
    }
}
