//! Sync orchestration
//!
//! Reads the manifest version, resolves the effective version code, then hands
//! the pair to each native updater. The two updaters are independent: a
//! missing project is a skip, and an I/O failure on one platform does not stop
//! the other from being attempted.

use std::path::Path;

use tracing::warn;

use crate::config::SyncOptions;
use crate::error::SyncError;
use crate::logging::progress;
use crate::manifest::read_package_version;
use crate::platform::{AndroidUpdater, IosUpdater, PlatformUpdater, UpdateOutcome};
use crate::version::{Provenance, VersionCode, resolve_version_code};

/// Result of a successful sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub version_name: String,
    pub version_code: VersionCode,
    pub provenance: Provenance,
    pub android: UpdateOutcome,
    pub ios: UpdateOutcome,
}

pub struct Synchronizer {
    android: Box<dyn PlatformUpdater>,
    ios: Box<dyn PlatformUpdater>,
}

impl Synchronizer {
    pub fn new() -> Self {
        Self::build(Box::new(AndroidUpdater::new()), Box::new(IosUpdater::new()))
    }

    /// Build a Synchronizer with custom updaters
    pub fn build(android: Box<dyn PlatformUpdater>, ios: Box<dyn PlatformUpdater>) -> Self {
        Self { android, ios }
    }

    pub fn sync(
        &self,
        project_root: &Path,
        options: &SyncOptions,
    ) -> Result<SyncReport, SyncError> {
        let verbose = options.verbose;

        let version_name = read_package_version(project_root)?;
        progress!(verbose, "Syncing version name: {}", version_name);

        let (version_code, provenance) =
            resolve_version_code(&version_name, options.version_code)?;
        progress!(verbose, "Using version code: {}", version_code);

        let android = Self::run(
            self.android.as_ref(),
            project_root,
            &version_name,
            version_code,
            verbose,
        );
        let ios = Self::run(
            self.ios.as_ref(),
            project_root,
            &version_name,
            version_code,
            verbose,
        );

        Ok(SyncReport {
            version_name,
            version_code,
            provenance,
            android: android?,
            ios: ios?,
        })
    }

    fn run(
        updater: &dyn PlatformUpdater,
        project_root: &Path,
        version_name: &str,
        version_code: VersionCode,
        verbose: bool,
    ) -> Result<UpdateOutcome, SyncError> {
        updater
            .update(project_root, version_name, version_code, verbose)
            .inspect_err(|e| warn!("{} update failed: {}", updater.platform(), e))
    }
}

impl Default for Synchronizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Sync the package.json version into the Android and iOS projects under
/// `project_root`.
pub fn sync_versions(
    project_root: &Path,
    options: &SyncOptions,
) -> Result<SyncReport, SyncError> {
    Synchronizer::new().sync(project_root, options)
}
