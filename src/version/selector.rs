//! Picks the version to advise between the "latest" and "beta" dist-tags

use std::cmp::Ordering;

use semver::Version;
use tracing::debug;

use crate::version::eligibility::is_eligible_upgrade;
use crate::version::semver::compare;

/// Select the best notification target for `current`, or `None`.
///
/// When both tags are eligible the greater one wins, so a release that has
/// caught up with the beta track supersedes it.
pub fn select_best(current: &Version, latest: &Version, beta: &Version) -> Option<Version> {
    let eligible_latest = is_eligible_upgrade(current, latest);
    let eligible_beta = is_eligible_upgrade(current, beta);

    debug!(
        "Selecting for {}: latest {} eligible={}, beta {} eligible={}",
        current, latest, eligible_latest, beta, eligible_beta
    );

    match (eligible_latest, eligible_beta) {
        (false, false) => None,
        (true, false) => Some(latest.clone()),
        (false, true) => Some(beta.clone()),
        (true, true) => {
            if compare(latest, beta) == Ordering::Greater {
                Some(latest.clone())
            } else {
                Some(beta.clone())
            }
        }
    }
}
