//! Upgrade eligibility rule
//!
//! Decides whether a running version should be told about a single candidate:
//! - never a downgrade or a lateral move
//! - a release consumer is never pushed onto a prerelease
//! - a prerelease consumer follows prereleases of its own base only
//! - any newer release is always eligible

use std::cmp::Ordering;

use semver::Version;

use crate::version::semver::{compare, is_prerelease, same_base};

pub fn is_eligible_upgrade(current: &Version, candidate: &Version) -> bool {
    if compare(candidate, current) != Ordering::Greater {
        return false;
    }

    if !is_prerelease(candidate) {
        return true;
    }

    // A prerelease of another base has not reached a release yet.
    is_prerelease(current) && same_base(candidate, current)
}
