use std::path::PathBuf;

use thiserror::Error;

use crate::config::MAX_VERSION_CODE;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Invalid semver format: \"{version}\"\n{reason}")]
    InvalidSemverFormat { version: String, reason: String },

    /// `version` is the source semver for a computed code, `None` for an override
    #[error("{}", overflow_message(*code, version.as_deref()))]
    VersionCodeOverflow { code: u128, version: Option<String> },

    #[error("Version code {code} is negative.\nVersion codes must be between 0 and {max}.", max = MAX_VERSION_CODE)]
    NegativeVersionCode { code: i64 },

    #[error(
        "package.json not found at: {}\n\
         Make sure you're running this command from your React Native project root.",
        path.display()
    )]
    ManifestNotFound { path: PathBuf },

    #[error("Failed to parse package.json at: {}\nError: {source}", path.display())]
    ManifestParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "No \"version\" field found in package.json at: {}\n\
         Add a version field like: \"version\": \"1.0.0\"",
        path.display()
    )]
    ManifestMissingVersion { path: PathBuf },

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SyncError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SyncError::Io {
            path: path.into(),
            source,
        }
    }
}

fn overflow_message(code: u128, version: Option<&str>) -> String {
    match version {
        Some(version) => format!(
            "Calculated version code {code} exceeds maximum value {MAX_VERSION_CODE}.\n\
             Version {version} is too high for the formula (10000*major + 100*minor + patch).\n\
             Use --version-code flag to manually specify a version code."
        ),
        None => format!(
            "Version code {code} exceeds maximum value {MAX_VERSION_CODE}.\n\
             Android and iOS use 32-bit signed integers for version codes."
        ),
    }
}
