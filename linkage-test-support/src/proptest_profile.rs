//! Environment-driven tuning for property-test suites.
//!
//! Every suite reads the same variables so a single override scales the
//! whole workspace up for soak runs or down for quick local checks.

use std::env;

/// Environment variable overriding the number of cases per property.
pub const CASES_ENV_KEY: &str = "LINKAGE_PROPTEST_CASES";
/// Environment variable toggling forked proptest execution.
pub const FORK_ENV_KEY: &str = "LINKAGE_PBT_FORK";

/// Case count and fork mode for a property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile from the process environment.
    ///
    /// Invalid overrides are logged and replaced by the defaults.
    ///
    /// # Examples
    /// ```
    /// use linkage_test_support::proptest_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_lookup(default_cases, default_fork, |key| env::var(key).ok())
    }

    /// Builds a profile from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(
        default_cases: u32,
        default_fork: bool,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let cases = override_or(CASES_ENV_KEY, lookup(CASES_ENV_KEY), default_cases, parse_cases);
        let fork = override_or(FORK_ENV_KEY, lookup(FORK_ENV_KEY), default_fork, parse_flag);
        Self { cases, fork }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

fn override_or<T>(
    key: &'static str,
    raw: Option<String>,
    default: T,
    parse: fn(&str) -> Result<T, String>,
) -> T {
    let Some(raw) = raw else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "ignoring invalid proptest override"
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be > 0".to_owned()),
        Ok(cases) => Ok(cases),
        Err(err) => Err(format!("parse error: {err}")),
    }
}

fn parse_flag(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rstest::rstest;

    use super::*;

    fn profile_with(
        vars: &[(&str, &str)],
        default_cases: u32,
        default_fork: bool,
    ) -> ProptestRunProfile {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        ProptestRunProfile::from_lookup(default_cases, default_fork, |key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let profile = profile_with(&[], 64, false);
        assert_eq!(profile.cases(), 64);
        assert!(!profile.fork());
    }

    #[rstest]
    #[case("1", 1)]
    #[case(" 250 ", 250)]
    #[case("25000", 25_000)]
    fn accepts_valid_case_overrides(#[case] raw: &str, #[case] expected: u32) {
        let profile = profile_with(&[(CASES_ENV_KEY, raw)], 64, false);
        assert_eq!(profile.cases(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-1")]
    #[case("many")]
    fn falls_back_on_invalid_case_overrides(#[case] raw: &str) {
        let profile = profile_with(&[(CASES_ENV_KEY, raw)], 64, false);
        assert_eq!(profile.cases(), 64);
    }

    #[rstest]
    #[case("TRUE", true)]
    #[case("on", true)]
    #[case("1", true)]
    #[case("no", false)]
    #[case("Off", false)]
    fn accepts_valid_fork_overrides(#[case] raw: &str, #[case] expected: bool) {
        let profile = profile_with(&[(FORK_ENV_KEY, raw)], 64, !expected);
        assert_eq!(profile.fork(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("maybe")]
    #[case("2")]
    fn falls_back_on_invalid_fork_overrides(#[case] raw: &str) {
        let profile = profile_with(&[(FORK_ENV_KEY, raw)], 64, true);
        assert!(profile.fork());
    }
}
