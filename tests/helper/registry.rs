//! Registry test utilities

use async_trait::async_trait;

use version_advisor::version::error::RegistryError;
use version_advisor::version::registry::{TagSetSource, VersionInfoSource};
use version_advisor::version::types::{RegistryTagSet, VersionInfo};

/// Registry returning fixed payloads, or NotFound when none is set
#[derive(Default)]
pub struct StaticRegistry {
    info: Option<VersionInfo>,
    tags: Option<RegistryTagSet>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.info = Some(VersionInfo {
            version: version.to_string(),
            dist_tag: "latest".to_string(),
            minimum_runtime_version: "10".to_string(),
        });
        self
    }

    pub fn with_tags(mut self, latest: &str, beta: &str) -> Self {
        self.tags = Some(RegistryTagSet::new(latest, Some(beta)));
        self
    }
}

#[async_trait]
impl VersionInfoSource for StaticRegistry {
    async fn fetch_version_info(&self) -> Result<VersionInfo, RegistryError> {
        self.info
            .clone()
            .ok_or_else(|| RegistryError::NotFound("static".to_string()))
    }
}

#[async_trait]
impl TagSetSource for StaticRegistry {
    async fn fetch_tag_set(&self) -> Result<RegistryTagSet, RegistryError> {
        self.tags
            .clone()
            .ok_or_else(|| RegistryError::NotFound("static".to_string()))
    }
}
