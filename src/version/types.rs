//! Payloads returned by version sources

use serde::Deserialize;

/// A single recommended version, as published under one dist-tag
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    /// Version string as published (parsed by the checker)
    pub version: String,
    /// Dist-tag the version was published under (e.g. "latest")
    pub dist_tag: String,
    /// Minimum runtime version the release requires; empty when not declared
    #[serde(default)]
    pub minimum_runtime_version: String,
}

/// The "latest" and "beta" dist-tags of a package
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistryTagSet {
    pub latest: String,
    /// Not every package publishes a beta channel
    #[serde(default)]
    pub beta: Option<String>,
}

impl RegistryTagSet {
    pub fn new(latest: &str, beta: Option<&str>) -> Self {
        Self {
            latest: latest.to_string(),
            beta: beta.map(str::to_string),
        }
    }
}
