//! Android build.gradle updater
//!
//! Rewrites the first `versionName "<value>"` and the first
//! `versionCode <integer>` assignment in `android/app/build.gradle`.
//!
//! Format example:
//! ```text
//! android {
//!     defaultConfig {
//!         versionCode 1
//!         versionName "1.0.0"
//!     }
//! }
//! ```

use std::path::{Path, PathBuf};

use regex::{Captures, Regex};

use crate::config::build_gradle_path;
use crate::error::SyncError;
use crate::logging::progress;
use crate::platform::traits::PlatformUpdater;
use crate::platform::types::{Platform, UpdateOutcome};
use crate::version::VersionCode;

/// Updater for Gradle build scripts
pub struct AndroidUpdater {
    /// Regex for `versionName "1.0.0"` or `versionName '1.0.0'`
    version_name_re: Regex,
    /// Regex for `versionCode 1`
    version_code_re: Regex,
}

impl AndroidUpdater {
    pub fn new() -> Self {
        Self {
            version_name_re: Regex::new(r#"(versionName\s+["'])([^"']*)(["'])"#).unwrap(),
            version_code_re: Regex::new(r"(versionCode\s+)(\d+)").unwrap(),
        }
    }

    /// Returns the build script path if it exists
    fn find_build_gradle(&self, project_root: &Path) -> Option<PathBuf> {
        let path = build_gradle_path(project_root);
        path.is_file().then_some(path)
    }

    /// Apply both field substitutions to `content`.
    ///
    /// Returns the patched content, or `None` when neither field changed.
    pub fn patch(
        &self,
        content: &str,
        version_name: &str,
        version_code: VersionCode,
        verbose: bool,
    ) -> Option<String> {
        let mut content = content.to_string();
        let mut modified = false;

        let replaced = self
            .version_name_re
            .replace(&content, |caps: &Captures| {
                format!("{}{}{}", &caps[1], version_name, &caps[3])
            })
            .into_owned();
        if replaced != content {
            content = replaced;
            modified = true;
            progress!(verbose, "Updated versionName to {}", version_name);
        }

        let replaced = self
            .version_code_re
            .replace(&content, |caps: &Captures| {
                format!("{}{}", &caps[1], version_code)
            })
            .into_owned();
        if replaced != content {
            content = replaced;
            modified = true;
            progress!(verbose, "Updated versionCode to {}", version_code);
        }

        modified.then_some(content)
    }
}

impl Default for AndroidUpdater {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformUpdater for AndroidUpdater {
    fn platform(&self) -> Platform {
        Platform::Android
    }

    fn update(
        &self,
        project_root: &Path,
        version_name: &str,
        version_code: VersionCode,
        verbose: bool,
    ) -> Result<UpdateOutcome, SyncError> {
        let Some(path) = self.find_build_gradle(project_root) else {
            progress!(verbose, "Skipping Android: build.gradle not found");
            return Ok(UpdateOutcome::Skipped);
        };

        let content = std::fs::read_to_string(&path).map_err(|e| SyncError::io(&path, e))?;

        let Some(patched) = self.patch(&content, version_name, version_code, verbose) else {
            return Ok(UpdateOutcome::Unchanged { path });
        };

        std::fs::write(&path, patched).map_err(|e| SyncError::io(&path, e))?;
        progress!(verbose, "Updated {}", path.display());
        Ok(UpdateOutcome::Updated { path })
    }
}
