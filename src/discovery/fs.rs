//! Filesystem access used by discovery

use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::config::MANIFEST_FILE_NAME;
use crate::discovery::error::ManifestError;
use crate::discovery::manifest::Manifest;

/// Directory listing and manifest reading
#[cfg_attr(test, automock)]
pub trait ModuleFs: Send + Sync {
    /// Names of the entries directly inside `path`, in a stable order
    fn list_directory(&self, path: &Path) -> std::io::Result<Vec<String>>;

    /// Read the manifest of the package rooted at `package_dir`
    fn read_manifest(&self, package_dir: &Path) -> Result<Manifest, ManifestError>;
}

/// [`ModuleFs`] backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl ModuleFs for LocalFs {
    fn list_directory(&self, path: &Path) -> std::io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(path)? {
            // Non UTF-8 names cannot be package names
            if let Ok(name) = entry?.file_name().into_string() {
                names.push(name);
            }
        }
        // read_dir order is platform dependent
        names.sort();
        Ok(names)
    }

    fn read_manifest(&self, package_dir: &Path) -> Result<Manifest, ManifestError> {
        let path = package_dir.join(MANIFEST_FILE_NAME);
        let content = std::fs::read_to_string(&path).map_err(|source| ManifestError::Unreadable {
            path: path.clone(),
            source,
        })?;
        Manifest::parse(&content, &path)
    }
}
