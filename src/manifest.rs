//! package.json reader
//!
//! Extracts the top-level `version` field, the single source of truth that
//! gets copied into the native projects.

use std::path::Path;

use serde_json::Value;
use tracing::warn;

use crate::config::package_json_path;
use crate::error::SyncError;

/// Read the version string from `<project_root>/package.json`.
///
/// Only malformed JSON is a parse error. Valid JSON without a non-empty string
/// `version` on a top-level object (including arrays, numbers and strings) is
/// reported as missing.
pub fn read_package_version(project_root: &Path) -> Result<String, SyncError> {
    let path = package_json_path(project_root);

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(SyncError::ManifestNotFound { path });
        }
        Err(e) => return Err(SyncError::io(path, e)),
    };

    let manifest: Value = serde_json::from_str(&content).map_err(|source| {
        warn!("Failed to parse {:?}: {}", path, source);
        SyncError::ManifestParseError {
            path: path.clone(),
            source,
        }
    })?;

    match manifest.get("version").and_then(Value::as_str) {
        Some(version) if !version.is_empty() => Ok(version.to_string()),
        _ => Err(SyncError::ManifestMissingVersion { path }),
    }
}
