use std::fmt;

use crate::config::MAX_VERSION_CODE;
use crate::error::SyncError;
use crate::version::semver::{SemanticVersion, parse_semver};

/// Where an effective version code came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Derived from the manifest version with the semver formula
    Computed,
    /// Supplied by the caller, bypassing the formula
    Overridden,
}

/// A platform build number, guaranteed to lie in `0..=MAX_VERSION_CODE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionCode(u32);

impl VersionCode {
    /// Build a code from the semver formula `10000*major + 100*minor + patch`.
    ///
    /// The formula is monotonic: a later version always yields a larger code.
    /// It reads as two decimal digits per field only while minor and patch
    /// stay below 100. Larger components are accepted and still order
    /// correctly in total, they just bleed into the neighbouring field's digits
    /// (1.150.0 -> 25000, same as 2.50.0).
    pub fn from_semver(version: &SemanticVersion, source: &str) -> Result<Self, SyncError> {
        let code = 10_000 * u128::from(version.major)
            + 100 * u128::from(version.minor)
            + u128::from(version.patch);

        match u32::try_from(code) {
            Ok(code) if code <= MAX_VERSION_CODE => Ok(Self(code)),
            _ => Err(SyncError::VersionCodeOverflow {
                code,
                version: Some(source.to_string()),
            }),
        }
    }

    /// Validate a caller-supplied code against the platform bounds.
    pub fn from_override(code: i64) -> Result<Self, SyncError> {
        if code < 0 {
            return Err(SyncError::NegativeVersionCode { code });
        }
        match u32::try_from(code) {
            Ok(value) if value <= MAX_VERSION_CODE => Ok(Self(value)),
            _ => Err(SyncError::VersionCodeOverflow {
                code: code as u128,
                version: None,
            }),
        }
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for VersionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<VersionCode> for u32 {
    fn from(code: VersionCode) -> Self {
        code.0
    }
}

/// Calculate the version code for a semver string.
///
/// Pre-release and build metadata are ignored, so "2.0.0-beta.1" and "2.0.0"
/// map to the same code. Minor and patch of 100 or more are accepted; the code
/// stays monotonic but no longer reads as two digits per field.
///
/// Fails when the string is not MAJOR.MINOR.PATCH or when the result does not
/// fit the 32-bit platform field.
pub fn calculate_version_code(version: &str) -> Result<VersionCode, SyncError> {
    let semver = parse_semver(version)?;
    VersionCode::from_semver(&semver, version)
}

/// Resolve the effective version code: the override when present, otherwise
/// the computed value.
pub fn resolve_version_code(
    version: &str,
    override_code: Option<i64>,
) -> Result<(VersionCode, Provenance), SyncError> {
    match override_code {
        Some(code) => Ok((VersionCode::from_override(code)?, Provenance::Overridden)),
        None => Ok((calculate_version_code(version)?, Provenance::Computed)),
    }
}
