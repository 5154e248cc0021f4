//! Platform updater trait definition

#[cfg(test)]
use mockall::automock;

use std::path::Path;

use crate::error::SyncError;
use crate::platform::types::{Platform, UpdateOutcome};
use crate::version::VersionCode;

/// Trait for writing a version name and code into one native project
#[cfg_attr(test, automock)]
pub trait PlatformUpdater {
    /// Returns the platform this updater handles
    fn platform(&self) -> Platform;

    /// Patch the native project under `project_root`.
    ///
    /// A missing native project is not an error: implementations return
    /// `UpdateOutcome::Skipped`. Only I/O failures on a project that exists
    /// are reported as `Err`.
    fn update(
        &self,
        project_root: &Path,
        version_name: &str,
        version_code: VersionCode,
        verbose: bool,
    ) -> Result<UpdateOutcome, SyncError>;
}
