use std::fmt;

use crate::error::SyncError;

/// The numeric MAJOR.MINOR.PATCH core of a semantic version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl SemanticVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl std::str::FromStr for SemanticVersion {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_semver(s)
    }
}

/// Strip pre-release and build metadata from a version string.
///
/// Truncates at the first `-`, then at the first `+`.
///
/// Examples:
/// - "1.2.3-beta.1+build.123" -> "1.2.3"
/// - "1.2.3+build.5" -> "1.2.3"
/// - "1.2.3" -> "1.2.3"
pub fn strip_metadata(version: &str) -> &str {
    let core = version.split('-').next().unwrap_or(version);
    core.split('+').next().unwrap_or(core)
}

/// Parse a semver string into its three numeric components.
///
/// Pre-release and build metadata are discarded before parsing. The remainder
/// must be exactly three dot-separated segments made of ASCII digits only; no
/// sign, whitespace or trailing text is tolerated.
pub fn parse_semver(version: &str) -> Result<SemanticVersion, SyncError> {
    let parts: Vec<&str> = strip_metadata(version).split('.').collect();
    let [major, minor, patch] = parts.as_slice() else {
        return Err(SyncError::InvalidSemverFormat {
            version: version.to_string(),
            reason: "Expected format: MAJOR.MINOR.PATCH (e.g., \"1.2.3\")".to_string(),
        });
    };

    match (
        parse_component(major),
        parse_component(minor),
        parse_component(patch),
    ) {
        (Some(major), Some(minor), Some(patch)) => Ok(SemanticVersion::new(major, minor, patch)),
        _ => Err(SyncError::InvalidSemverFormat {
            version: version.to_string(),
            reason: format!("Version components must be numbers (got: {major}.{minor}.{patch})"),
        }),
    }
}

fn parse_component(segment: &str) -> Option<u64> {
    // u64::from_str accepts a leading '+', which is not a valid component
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.3", "1.2.3")]
    #[case("1.2.3-beta.1", "1.2.3")]
    #[case("1.2.3+build.5", "1.2.3")]
    #[case("2.0.0-beta.1+build5", "2.0.0")]
    #[case("1.2.3+build-5", "1.2.3")] // '-' inside build metadata still truncates first
    #[case("", "")]
    fn strip_metadata_returns_core(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_metadata(input), expected);
    }

    #[rstest]
    #[case("1.2.3", SemanticVersion::new(1, 2, 3))]
    #[case("0.0.0", SemanticVersion::new(0, 0, 0))]
    #[case("2.0.0-beta.1+build5", SemanticVersion::new(2, 0, 0))]
    #[case("10.20.30+sha.abc", SemanticVersion::new(10, 20, 30))]
    #[case("1.150.7", SemanticVersion::new(1, 150, 7))]
    #[case("01.02.03", SemanticVersion::new(1, 2, 3))]
    fn parse_semver_accepts_valid_versions(#[case] input: &str, #[case] expected: SemanticVersion) {
        assert_eq!(parse_semver(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("1")]
    #[case("1.2")]
    #[case("1.2.3.4")]
    #[case("a.b.c")]
    #[case("1.x.3")]
    #[case("1.2.")]
    #[case(".1.2")]
    #[case("+1.2.3")]
    #[case("1.+2.3")]
    #[case(" 1.2.3")]
    #[case("1.2.3 ")]
    #[case("1.2.3abc")]
    #[case("v1.2.3")]
    #[case("-1.2.3")] // truncated to "" at the first '-'
    #[case("99999999999999999999.0.0")] // does not fit in u64
    fn parse_semver_rejects_invalid_versions(#[case] input: &str) {
        let err = parse_semver(input).unwrap_err();

        assert!(
            matches!(&err, SyncError::InvalidSemverFormat { version, .. } if version == input),
            "unexpected error for {input:?}: {err:?}"
        );
    }

    #[test]
    fn parse_semver_error_message_names_input() {
        let err = parse_semver("not-a-version").unwrap_err();

        assert!(err.to_string().contains("\"not-a-version\""));
    }

    #[test]
    fn parse_semver_error_message_shows_bad_components() {
        let err = parse_semver("1.x.3").unwrap_err();

        assert!(err.to_string().contains("(got: 1.x.3)"));
    }

    #[test]
    fn semantic_version_displays_as_dotted_triple() {
        let version: SemanticVersion = "4.5.6-rc.1".parse().unwrap();

        assert_eq!(version.to_string(), "4.5.6");
    }
}
