//! Update checks against an injected version source

use semver::Version;
use tracing::{debug, info, warn};

use crate::version::eligibility::is_eligible_upgrade;
use crate::version::error::CheckError;
use crate::version::registry::{TagSetSource, VersionInfoSource};
use crate::version::selector::select_best;
use crate::version::semver::parse_version;

/// Ask `source` for its recommended version and return it if `current`
/// should upgrade to it.
///
/// # Returns
/// * `Ok(Some(version))` - an eligible upgrade is available
/// * `Ok(None)` - nothing to advise; this is not an error
/// * `Err(CheckError)` - the fetch failed or returned an unparseable version
pub async fn check_for_update<S>(current: &Version, source: &S) -> Result<Option<Version>, CheckError>
where
    S: VersionInfoSource + ?Sized,
{
    let info = source.fetch_version_info().await?;
    let candidate = parse_version(&info.version)?;

    if is_eligible_upgrade(current, &candidate) {
        info!(
            "Upgrade available: {} -> {} (dist-tag {})",
            current, candidate, info.dist_tag
        );
        Ok(Some(candidate))
    } else {
        debug!(
            "No upgrade from {}: {} (dist-tag {}) is not eligible",
            current, candidate, info.dist_tag
        );
        Ok(None)
    }
}

/// Callback flavour of [`check_for_update`].
///
/// `on_result` receives the new version or the failure. When there is nothing
/// to advise it is not called at all.
pub async fn notify_on_update<S, F>(current: &Version, source: &S, on_result: F)
where
    S: VersionInfoSource + ?Sized,
    F: FnOnce(Result<Version, CheckError>),
{
    match check_for_update(current, source).await {
        Ok(Some(version)) => on_result(Ok(version)),
        Ok(None) => {}
        Err(e) => {
            warn!("Update check for {} failed: {}", current, e);
            on_result(Err(e));
        }
    }
}

/// Fetch the "latest" and "beta" dist-tags and pick the one `current` should
/// be told about.
///
/// A registry without a beta tag is treated as offering `latest` only.
pub async fn get_latest_advisable_version<S>(
    current: &Version,
    source: &S,
) -> Result<Option<Version>, CheckError>
where
    S: TagSetSource + ?Sized,
{
    let tags = source.fetch_tag_set().await?;
    let latest = parse_version(&tags.latest)?;
    let beta = tags.beta.as_deref().map(parse_version).transpose()?;

    let selected = select_best(current, &latest, beta.as_ref().unwrap_or(&latest));

    match &selected {
        Some(version) => info!("Advisable version for {}: {}", current, version),
        None => debug!("No advisable version for {}", current),
    }

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::error::{RegistryError, VersionError};
    use crate::version::registry::{MockTagSetSource, MockVersionInfoSource};
    use crate::version::types::{RegistryTagSet, VersionInfo};
    use rstest::rstest;

    fn v(s: &str) -> Version {
        parse_version(s).unwrap()
    }

    fn info_source(version: &str) -> MockVersionInfoSource {
        let info = VersionInfo {
            version: version.to_string(),
            dist_tag: "latest".to_string(),
            minimum_runtime_version: "10".to_string(),
        };
        let mut source = MockVersionInfoSource::new();
        source
            .expect_fetch_version_info()
            .times(1)
            .returning(move || Ok(info.clone()));
        source
    }

    fn tag_source(latest: &str, beta: Option<&str>) -> MockTagSetSource {
        let tags = RegistryTagSet::new(latest, beta);
        let mut source = MockTagSetSource::new();
        source
            .expect_fetch_tag_set()
            .times(1)
            .returning(move || Ok(tags.clone()));
        source
    }

    #[rstest]
    #[case("1.17.0", "1.18.0", Some("1.18.0"))]
    #[case("1.17.0", "1.18.0-beta.2", None)]
    #[case("1.18.0-beta.1", "1.18.0-beta.2", Some("1.18.0-beta.2"))]
    #[case("1.18.0-beta.2", "1.18.0", Some("1.18.0"))]
    #[case("1.18.0-beta.2", "1.19.0", Some("1.19.0"))]
    #[case("1.17.0-beta.1", "1.18.0-beta.2", None)]
    #[tokio::test]
    async fn check_for_update_returns_expected(
        #[case] current: &str,
        #[case] published: &str,
        #[case] expected: Option<&str>,
    ) {
        let source = info_source(published);

        let result = check_for_update(&v(current), &source).await.unwrap();

        assert_eq!(result, expected.map(v));
    }

    #[tokio::test]
    async fn check_for_update_surfaces_fetch_failure() {
        let mut source = MockVersionInfoSource::new();
        source
            .expect_fetch_version_info()
            .returning(|| Err(RegistryError::NotFound("server".to_string())));

        let result = check_for_update(&v("1.17.0"), &source).await;

        assert!(matches!(
            result,
            Err(CheckError::Fetch(RegistryError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn check_for_update_rejects_malformed_published_version() {
        let source = info_source("not-a-version");

        let result = check_for_update(&v("1.17.0"), &source).await;

        assert!(matches!(
            result,
            Err(CheckError::Version(VersionError::MalformedVersion { .. }))
        ));
    }

    #[tokio::test]
    async fn notify_on_update_reports_eligible_version() {
        let source = info_source("1.18.0");
        let mut received = None;

        notify_on_update(&v("1.17.0"), &source, |result| received = Some(result.unwrap())).await;

        assert_eq!(received, Some(v("1.18.0")));
    }

    #[tokio::test]
    async fn notify_on_update_stays_silent_without_eligible_version() {
        let source = info_source("1.18.0-beta.2");
        let mut called = false;

        notify_on_update(&v("1.17.0"), &source, |_| called = true).await;

        assert!(!called);
    }

    #[tokio::test]
    async fn notify_on_update_reports_failure() {
        let mut source = MockVersionInfoSource::new();
        source
            .expect_fetch_version_info()
            .returning(|| Err(RegistryError::InvalidResponse("boom".to_string())));
        let mut failed = false;

        notify_on_update(&v("1.17.0"), &source, |result| failed = result.is_err()).await;

        assert!(failed);
    }

    #[tokio::test]
    async fn check_for_update_accepts_closure_source() {
        let source = || async {
            Ok::<_, RegistryError>(VersionInfo {
                version: "1.19.0".to_string(),
                dist_tag: "latest".to_string(),
                minimum_runtime_version: String::new(),
            })
        };

        let result = check_for_update(&v("1.18.0-beta.2"), &source).await.unwrap();

        assert_eq!(result, Some(v("1.19.0")));
    }

    #[rstest]
    #[case("1.17.0", "1.18.3", Some("1.19.0-beta.1"), Some("1.18.3"))]
    #[case("1.18.0-beta.2", "1.17.3", Some("1.18.0-beta.3"), Some("1.18.0-beta.3"))]
    #[case("1.18.0-beta.2", "1.18.0", Some("1.18.0-beta.3"), Some("1.18.0"))]
    #[case("1.17.0", "1.18.3", None, Some("1.18.3"))]
    #[case("1.18.3", "1.18.3", None, None)]
    #[tokio::test]
    async fn get_latest_advisable_version_returns_expected(
        #[case] current: &str,
        #[case] latest: &str,
        #[case] beta: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let source = tag_source(latest, beta);

        let result = get_latest_advisable_version(&v(current), &source)
            .await
            .unwrap();

        assert_eq!(result, expected.map(v));
    }

    #[tokio::test]
    async fn get_latest_advisable_version_rejects_malformed_beta() {
        let source = tag_source("1.18.3", Some("beta"));

        let result = get_latest_advisable_version(&v("1.17.0"), &source).await;

        assert!(matches!(result, Err(CheckError::Version(_))));
    }

    #[tokio::test]
    async fn get_latest_advisable_version_surfaces_fetch_failure() {
        let mut source = MockTagSetSource::new();
        source
            .expect_fetch_tag_set()
            .returning(|| Err(RegistryError::NotFound("server".to_string())));

        let result = get_latest_advisable_version(&v("1.17.0"), &source).await;

        assert!(matches!(result, Err(CheckError::Fetch(_))));
    }
}
