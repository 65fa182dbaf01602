//! Runtime detection for Node.js and the generated project language

use crate::error::{Result, ScaffoldError};
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Language dialect of the generated backend sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    TypeScript,
    #[default]
    JavaScript,
}

impl Language {
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::TypeScript => "TypeScript",
            Language::JavaScript => "JavaScript",
        }
    }

    /// File extension used for generated source files
    pub fn extension(&self) -> &'static str {
        match self {
            Language::TypeScript => "ts",
            Language::JavaScript => "js",
        }
    }

    /// Language implied by the `--typescript` flag
    pub fn from_typescript_flag(typescript: bool) -> Self {
        if typescript {
            Language::TypeScript
        } else {
            Language::JavaScript
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    /// Where the executable was resolved, if anywhere
    pub path: Option<PathBuf>,
    /// `--version` output; `None` when the tool did not answer
    pub version: Option<String>,
    pub available: bool,
}

/// Check whether `binary` resolves on the search path
pub fn check_tool(binary: &str, name: &'static str) -> RuntimeInfo {
    let search_path = std::env::var_os("PATH").unwrap_or_default();
    check_tool_in(binary, name, &search_path)
}

/// Same as [`check_tool`] against an explicit search path
pub fn check_tool_in(binary: &str, name: &'static str, search_path: &OsStr) -> RuntimeInfo {
    match find_executable(binary, search_path) {
        Some(path) => {
            // Availability hinges on resolution alone; the version is informational
            let version = Command::new(&path)
                .arg("--version")
                .output()
                .ok()
                .filter(|out| out.status.success())
                .map(|out| String::from_utf8_lossy(&out.stdout).trim().to_string());
            RuntimeInfo {
                name,
                path: Some(path),
                version,
                available: true,
            }
        }
        None => RuntimeInfo {
            name,
            path: None,
            version: None,
            available: false,
        },
    }
}

/// First executable named `binary` in the `PATH`-style list `search_path`
pub fn find_executable(binary: &str, search_path: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(search_path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| candidates(&dir, binary))
        .find(|candidate| is_executable(candidate))
}

#[cfg(windows)]
fn candidates(dir: &Path, binary: &str) -> Vec<PathBuf> {
    ["", ".exe", ".cmd", ".bat"]
        .iter()
        .map(|ext| dir.join(format!("{}{}", binary, ext)))
        .collect()
}

#[cfg(not(windows))]
fn candidates(dir: &Path, binary: &str) -> Vec<PathBuf> {
    vec![dir.join(binary)]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    check_tool("node", "Node.js")
}

/// Turn a missing runtime into a fatal error pointing at its installer
pub fn require_runtime(info: RuntimeInfo, install_url: &'static str) -> Result<RuntimeInfo> {
    if info.available {
        Ok(info)
    } else {
        Err(ScaffoldError::MissingRuntime {
            name: info.name,
            install_url,
        })
    }
}
