//! Writing directory trees and file manifests to disk

use crate::error::{Result, ScaffoldError};
use crate::templates::manifest::FileManifest;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[cfg(unix)]
const DIR_MODE: u32 = 0o755;
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Create each directory under `root`, including missing parents.
/// Stops at the first failure; directories already created are left in place.
pub fn create_dirs(root: &Path, dirs: &[&str]) -> Result<Vec<PathBuf>> {
    let mut created = Vec::with_capacity(dirs.len());

    for dir in dirs {
        let path = root.join(dir);
        create_dir_all(&path).map_err(|source| ScaffoldError::CreateDir {
            path: path.clone(),
            source,
        })?;
        created.push(path);
    }

    Ok(created)
}

/// Write every manifest entry under `root`, truncating existing files.
/// Stops at the first failure; files already written are left in place.
pub fn write_manifest(root: &Path, manifest: &FileManifest) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(manifest.len());

    for (relative, content) in manifest.iter() {
        let path = root.join(relative);
        write_file(&path, content).map_err(|source| ScaffoldError::WriteFile {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }

    Ok(written)
}

/// True when `dir` has no entries
pub fn is_dir_empty(dir: &Path) -> Result<bool> {
    let mut entries = fs::read_dir(dir).map_err(|source| ScaffoldError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(entries.next().is_none())
}

#[cfg(unix)]
fn create_dir_all(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new()
        .recursive(true)
        .mode(DIR_MODE)
        .create(path)
}

#[cfg(not(unix))]
fn create_dir_all(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}

fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    let mut file = options.open(path)?;
    file.write_all(content.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dirs_makes_parents() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("backend");

        let created = create_dirs(&root, &["src/controllers", "src/models"]).unwrap();

        assert_eq!(created.len(), 2);
        assert!(root.join("src/controllers").is_dir());
        assert!(root.join("src/models").is_dir());
    }

    #[test]
    fn test_create_dirs_blocked_by_file() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("src"), "not a directory").unwrap();

        let err = create_dirs(temp.path(), &["src/routes"]).unwrap_err();
        match err {
            ScaffoldError::CreateDir { path, .. } => assert_eq!(path, temp.path().join("src/routes")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_write_manifest() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir(temp.path().join("src")).unwrap();
        let manifest = FileManifest::new()
            .with_file("src/index.js", "console.log('hi');")
            .unwrap()
            .with_file("package.json", "{}")
            .unwrap();

        let written = write_manifest(temp.path(), &manifest).unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(
            fs::read_to_string(temp.path().join("src/index.js")).unwrap(),
            "console.log('hi');"
        );
        assert_eq!(fs::read_to_string(temp.path().join("package.json")).unwrap(), "{}");
    }

    #[test]
    fn test_write_manifest_truncates_existing_file() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("package.json"), "a much longer previous content").unwrap();
        let manifest = FileManifest::new().with_file("package.json", "{}").unwrap();

        write_manifest(temp.path(), &manifest).unwrap();

        assert_eq!(fs::read_to_string(temp.path().join("package.json")).unwrap(), "{}");
    }

    #[test]
    fn test_write_manifest_keeps_earlier_files_on_failure() {
        let temp = tempfile::tempdir().unwrap();
        // "package.json" sorts before "src/index.js"; src/ is missing so the second write fails
        let manifest = FileManifest::new()
            .with_file("package.json", "{}")
            .unwrap()
            .with_file("src/index.js", "x")
            .unwrap();

        let err = write_manifest(temp.path(), &manifest).unwrap_err();

        assert!(matches!(err, ScaffoldError::WriteFile { .. }));
        assert!(temp.path().join("package.json").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_written_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::tempdir().unwrap();
        let manifest = FileManifest::new().with_file("package.json", "{}").unwrap();
        write_manifest(temp.path(), &manifest).unwrap();

        let mode = fs::metadata(temp.path().join("package.json"))
            .unwrap()
            .permissions()
            .mode();
        // umask may clear bits but never adds any
        assert_eq!(mode & 0o777 & !FILE_MODE, 0);
    }

    #[test]
    fn test_is_dir_empty() {
        let temp = tempfile::tempdir().unwrap();
        assert!(is_dir_empty(temp.path()).unwrap());

        fs::write(temp.path().join(".gitkeep"), "").unwrap();
        assert!(!is_dir_empty(temp.path()).unwrap());

        let err = is_dir_empty(&temp.path().join("missing")).unwrap_err();
        assert!(matches!(err, ScaffoldError::ReadDir { .. }));
    }
}
