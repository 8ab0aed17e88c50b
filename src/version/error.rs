use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Malformed version {version:?}: {source}")]
    MalformedVersion {
        version: String,
        #[source]
        source: semver::Error,
    },
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Failure of an update check. "No eligible update" is never one of these.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Version(#[from] VersionError),

    #[error("Failed to fetch version information: {0}")]
    Fetch(#[from] RegistryError),
}
