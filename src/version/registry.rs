//! Source traits for fetching published version information
//!
//! The checker depends only on these traits. Any async closure returning the
//! right payload is a source too, so callers can inject a fetch function
//! directly.

use std::future::Future;

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::{RegistryTagSet, VersionInfo};

/// Answers the single-recommendation query
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionInfoSource: Send + Sync {
    async fn fetch_version_info(&self) -> Result<VersionInfo, RegistryError>;
}

/// Answers the dual-tag query
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait TagSetSource: Send + Sync {
    async fn fetch_tag_set(&self) -> Result<RegistryTagSet, RegistryError>;
}

#[async_trait::async_trait]
impl<F, Fut> VersionInfoSource for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<VersionInfo, RegistryError>> + Send + 'static,
{
    async fn fetch_version_info(&self) -> Result<VersionInfo, RegistryError> {
        self().await
    }
}

#[async_trait::async_trait]
impl<F, Fut> TagSetSource for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<RegistryTagSet, RegistryError>> + Send + 'static,
{
    async fn fetch_tag_set(&self) -> Result<RegistryTagSet, RegistryError> {
        self().await
    }
}
