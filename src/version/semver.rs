//! Version comparison primitives shared by the eligibility rule and the selector

use std::cmp::Ordering;

use semver::Version;

use crate::version::error::VersionError;

/// Parse a `major.minor.patch[-prerelease][+build]` string.
///
/// Surrounding whitespace is ignored. Partial versions such as `1.2` are
/// rejected: a published version always carries all three components.
pub fn parse_version(version: &str) -> Result<Version, VersionError> {
    Version::parse(version.trim()).map_err(|source| VersionError::MalformedVersion {
        version: version.to_string(),
        source,
    })
}

/// Total order by semver precedence.
///
/// Build metadata is ignored, so `1.0.0+a` and `1.0.0+b` compare equal.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.cmp_precedence(b)
}

/// Whether both versions share `major.minor.patch`
pub fn same_base(a: &Version, b: &Version) -> bool {
    a.major == b.major && a.minor == b.minor && a.patch == b.patch
}

pub fn is_prerelease(version: &Version) -> bool {
    !version.pre.is_empty()
}
