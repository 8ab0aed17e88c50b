use std::path::PathBuf;

use thiserror::Error;

/// A single package manifest could not be used
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid manifest {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ManifestError {
    /// The package directory simply has no manifest
    pub fn is_missing(&self) -> bool {
        matches!(self, ManifestError::Unreadable { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("No readable search root among {0:?}")]
    NoAccessibleRoot(Vec<PathBuf>),
}
