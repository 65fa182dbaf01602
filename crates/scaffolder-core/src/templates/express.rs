//! Built-in Express backend template

use crate::error::{Result, ScaffoldError};
use crate::runtime::check::Language;
use crate::templates::manifest::FileManifest;
use semver::VersionReq;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Directories created under the backend project root
pub const SOURCE_DIRS: &[&str] = &["src/controllers", "src/routes", "src/models"];

/// Express version requirement declared in the generated package.json
pub const EXPRESS_VERSION: &str = "^4.17.1";

/// Minimal Express server; the same source serves both dialects
pub const SAMPLE_APP: &str = r#"const express = require('express');
const app = express();

app.get('/', (req, res) => {
  res.send('Hello from Express!');
});

app.listen(3000, () => {
  console.log('Server is running on port 3000');
});"#;

/// The subset of package.json the template declares
#[derive(Debug, Serialize)]
struct PackageJson {
    name: &'static str,
    version: &'static str,
    dependencies: BTreeMap<&'static str, VersionReq>,
}

/// Render the backend package.json
pub fn package_json() -> Result<String> {
    let mut dependencies = BTreeMap::new();
    dependencies.insert("express", VersionReq::parse(EXPRESS_VERSION)?);

    let package = PackageJson {
        name: "express-app",
        version: "1.0.0",
        dependencies,
    };

    serde_json::to_string_pretty(&package).map_err(|source| ScaffoldError::Render {
        file: "package.json",
        source,
    })
}

/// Path of the application entry point for `language`
pub fn entry_point(language: Language) -> PathBuf {
    PathBuf::from("src").join(format!("index.{}", language.extension()))
}

/// All files of the Express template
pub fn manifest(language: Language) -> Result<FileManifest> {
    FileManifest::new()
        .with_file(entry_point(language), SAMPLE_APP)?
        .with_file("package.json", package_json()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_json_declares_express() {
        let content = package_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(value["name"], "express-app");
        assert_eq!(value["version"], "1.0.0");
        assert_eq!(value["dependencies"]["express"], "^4.17.1");
        assert_eq!(value["dependencies"].as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_package_json_layout() {
        let expected = r#"{
  "name": "express-app",
  "version": "1.0.0",
  "dependencies": {
    "express": "^4.17.1"
  }
}"#;
        assert_eq!(package_json().unwrap(), expected);
    }

    #[test]
    fn test_entry_point_follows_language() {
        assert_eq!(entry_point(Language::TypeScript), PathBuf::from("src/index.ts"));
        assert_eq!(entry_point(Language::JavaScript), PathBuf::from("src/index.js"));
    }

    #[test]
    fn test_manifest_has_two_files() {
        let manifest = manifest(Language::TypeScript).unwrap();
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.get("src/index.ts"), Some(SAMPLE_APP));
        assert!(manifest.get("package.json").is_some());
        assert!(manifest.get("src/index.js").is_none());
    }
}
