//! On-disk module tree fixtures

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use tempfile::TempDir;

/// A temporary `node_modules` directory
pub struct ModuleTree {
    dir: TempDir,
}

impl ModuleTree {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("node_modules")).unwrap();
        Self { dir }
    }

    /// The `node_modules` directory, i.e. the search root
    pub fn root(&self) -> PathBuf {
        self.dir.path().join("node_modules")
    }

    /// Install a package under `dir_name` (may be `@scope/name`)
    pub fn install(&self, dir_name: &str, name: &str, version: &str, keywords: &[&str]) -> &Self {
        let manifest = json!({
            "name": name,
            "version": version,
            "keywords": keywords,
        });
        self.write(dir_name, &manifest.to_string())
    }

    /// Install a package whose manifest is arbitrary text
    pub fn write(&self, dir_name: &str, manifest: &str) -> &Self {
        let package_dir = self.root().join(dir_name);
        fs::create_dir_all(&package_dir).unwrap();
        fs::write(package_dir.join("package.json"), manifest).unwrap();
        self
    }

    pub fn mkdir(&self, relative: &str) -> &Self {
        fs::create_dir_all(self.root().join(relative)).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
