//! npm registry API implementation

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{DEFAULT_DIST_TAG, FETCH_TIMEOUT_MS, RegistryConfig};
use crate::version::error::RegistryError;
use crate::version::registry::{TagSetSource, VersionInfoSource};
use crate::version::types::{RegistryTagSet, VersionInfo};

/// Response from the dist-tags endpoint
#[derive(Debug, Deserialize)]
struct DistTagsResponse {
    latest: Option<String>,
    beta: Option<String>,
}

/// Response from the `{package}/{tag}` endpoint (the published package.json)
#[derive(Debug, Deserialize)]
struct PackageVersionResponse {
    version: String,
    /// Usually an object; some old packages publish an array
    #[serde(default)]
    engines: serde_json::Value,
}

/// npm registry client bound to a single package
pub struct NpmRegistry {
    client: reqwest::Client,
    base_url: String,
    package_name: String,
    tag: String,
}

impl NpmRegistry {
    /// Creates a new NpmRegistry for `package_name` with a custom base URL
    pub fn new(base_url: &str, package_name: &str) -> Self {
        Self::with_timeout(base_url, package_name, Duration::from_millis(FETCH_TIMEOUT_MS))
    }

    pub fn with_timeout(base_url: &str, package_name: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("version-advisor")
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
            package_name: package_name.to_string(),
            tag: DEFAULT_DIST_TAG.to_string(),
        }
    }

    /// Creates a registry for `package_name` from configuration
    pub fn from_config(config: &RegistryConfig, package_name: &str) -> Self {
        Self::with_timeout(
            &config.url,
            package_name,
            Duration::from_millis(config.timeout_ms),
        )
        .with_tag(&config.tag)
    }

    /// Dist-tag queried by [`VersionInfoSource::fetch_version_info`]
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = tag.to_string();
        self
    }

    /// Encode package name for URL (handles scoped packages)
    fn encode_package_name(package_name: &str) -> String {
        if package_name.starts_with('@') {
            // Scoped package: @scope/name -> @scope%2Fname
            package_name.replace('/', "%2F")
        } else {
            package_name.to_string()
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, RegistryError> {
        debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(self.package_name.clone()));
        }

        if !status.is_success() {
            warn!("npm registry returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        response.json().await.map_err(|e| {
            warn!("Failed to parse npm registry response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })
    }
}

#[async_trait::async_trait]
impl TagSetSource for NpmRegistry {
    async fn fetch_tag_set(&self) -> Result<RegistryTagSet, RegistryError> {
        let url = format!(
            "{}/-/package/{}/dist-tags",
            self.base_url,
            Self::encode_package_name(&self.package_name)
        );

        let tags: DistTagsResponse = self.get_json(&url).await?;

        let latest = tags.latest.ok_or_else(|| {
            RegistryError::InvalidResponse(format!(
                "No latest dist-tag for {}",
                self.package_name
            ))
        })?;

        Ok(RegistryTagSet {
            latest,
            beta: tags.beta,
        })
    }
}

#[async_trait::async_trait]
impl VersionInfoSource for NpmRegistry {
    async fn fetch_version_info(&self) -> Result<VersionInfo, RegistryError> {
        let url = format!(
            "{}/{}/{}",
            self.base_url,
            Self::encode_package_name(&self.package_name),
            self.tag
        );

        let package: PackageVersionResponse = self.get_json(&url).await?;

        let minimum_runtime_version = package
            .engines
            .get("node")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_string();

        Ok(VersionInfo {
            version: package.version,
            dist_tag: self.tag.clone(),
            minimum_runtime_version,
        })
    }
}
