//! Shared test utilities for `linkage-core`.

use linkage_test_support::proptest_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

/// Builds a proptest configuration from the shared run profile.
///
/// Keeps every property suite in the crate on the same
/// `LINKAGE_PROPTEST_CASES` and `LINKAGE_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}
