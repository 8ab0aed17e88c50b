//! Typed view of a package manifest (package.json)

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use crate::discovery::error::ManifestError;

/// The fields discovery relies on. Everything else in the manifest is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    /// A manifest without keywords matches no keyword
    #[serde(default)]
    pub keywords: BTreeSet<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Manifest {
    /// Parse manifest content read from `path` (used only for error context)
    pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
        serde_json::from_str(content).map_err(|source| ManifestError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.contains(keyword)
    }
}
