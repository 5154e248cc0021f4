//! iOS project.pbxproj updater
//!
//! Rewrites every `MARKETING_VERSION = <value>;` (CFBundleShortVersionString)
//! and `CURRENT_PROJECT_VERSION = <value>;` (CFBundleVersion) assignment, one
//! per build configuration.

use std::path::{Path, PathBuf};

use regex::{Captures, Regex};
use tracing::debug;

use crate::config::{PBXPROJ_FILE, XCODEPROJ_SUFFIX, ios_dir};
use crate::error::SyncError;
use crate::logging::progress;
use crate::platform::traits::PlatformUpdater;
use crate::platform::types::{Platform, UpdateOutcome};
use crate::version::VersionCode;

/// Updater for Xcode project files
pub struct IosUpdater {
    /// Regex for `MARKETING_VERSION = 1.0.0;`
    marketing_version_re: Regex,
    /// Regex for `CURRENT_PROJECT_VERSION = 1;`
    current_project_version_re: Regex,
}

impl IosUpdater {
    pub fn new() -> Self {
        Self {
            marketing_version_re: Regex::new(r"(MARKETING_VERSION\s*=\s*)([^;]+)(;)").unwrap(),
            current_project_version_re: Regex::new(r"(CURRENT_PROJECT_VERSION\s*=\s*)([^;]+)(;)")
                .unwrap(),
        }
    }

    /// Find `ios/<Name>.xcodeproj/project.pbxproj`.
    ///
    /// Entries are visited in name order; the first bundle that contains a
    /// project file wins.
    fn find_pbxproj(&self, project_root: &Path) -> Option<PathBuf> {
        let ios_dir = ios_dir(project_root);
        let entries = match std::fs::read_dir(&ios_dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Cannot read {}: {}", ios_dir.display(), e);
                return None;
            }
        };

        let mut bundles: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
            .filter(|entry| entry.file_name().to_string_lossy().ends_with(XCODEPROJ_SUFFIX))
            .map(|entry| entry.path())
            .collect();
        bundles.sort();

        bundles
            .into_iter()
            .map(|bundle| bundle.join(PBXPROJ_FILE))
            .find(|path| path.is_file())
    }

    /// Apply both setting substitutions to `content`.
    ///
    /// Returns the patched content, or `None` when neither setting changed.
    pub fn patch(
        &self,
        content: &str,
        version_name: &str,
        version_code: &str,
        verbose: bool,
    ) -> Option<String> {
        let mut content = content.to_string();
        let mut modified = false;

        let replaced = self
            .marketing_version_re
            .replace_all(&content, |caps: &Captures| {
                format!("{}{}{}", &caps[1], version_name, &caps[3])
            })
            .into_owned();
        if replaced != content {
            content = replaced;
            modified = true;
            progress!(verbose, "Updated MARKETING_VERSION to {}", version_name);
        }

        let replaced = self
            .current_project_version_re
            .replace_all(&content, |caps: &Captures| {
                format!("{}{}{}", &caps[1], version_code, &caps[3])
            })
            .into_owned();
        if replaced != content {
            content = replaced;
            modified = true;
            progress!(verbose, "Updated CURRENT_PROJECT_VERSION to {}", version_code);
        }

        modified.then_some(content)
    }
}

impl Default for IosUpdater {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformUpdater for IosUpdater {
    fn platform(&self) -> Platform {
        Platform::Ios
    }

    fn update(
        &self,
        project_root: &Path,
        version_name: &str,
        version_code: VersionCode,
        verbose: bool,
    ) -> Result<UpdateOutcome, SyncError> {
        let Some(path) = self.find_pbxproj(project_root) else {
            progress!(verbose, "Skipping iOS: project.pbxproj not found");
            return Ok(UpdateOutcome::Skipped);
        };

        let content = std::fs::read_to_string(&path).map_err(|e| SyncError::io(&path, e))?;

        let version_code = version_code.to_string();
        let Some(patched) = self.patch(&content, version_name, &version_code, verbose) else {
            return Ok(UpdateOutcome::Unchanged { path });
        };

        std::fs::write(&path, patched).map_err(|e| SyncError::io(&path, e))?;
        progress!(verbose, "Updated {}", path.display());
        Ok(UpdateOutcome::Updated { path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PBXPROJ: &str = r#"// !$*UTF8*$!
{
	objects = {
		13B07F941A680F5B00A75B9A /* Debug */ = {
			isa = XCBuildConfiguration;
			buildSettings = {
				CURRENT_PROJECT_VERSION = 1;
				MARKETING_VERSION = 1.0.0;
			};
			name = Debug;
		};
		13B07F951A680F5B00A75B9A /* Release */ = {
			isa = XCBuildConfiguration;
			buildSettings = {
				CURRENT_PROJECT_VERSION = 1;
				MARKETING_VERSION = 1.0.0;
			};
			name = Release;
		};
	};
}"#;

    fn code(value: i64) -> VersionCode {
        VersionCode::from_override(value).unwrap()
    }

    fn project_with_pbxproj(bundle: &str, content: &str) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let bundle_dir = temp_dir.path().join("ios").join(bundle);
        std::fs::create_dir_all(&bundle_dir).unwrap();
        std::fs::write(bundle_dir.join("project.pbxproj"), content).unwrap();
        temp_dir
    }

    #[test]
    fn patch_replaces_every_build_configuration() {
        let updater = IosUpdater::new();

        let patched = updater.patch(PBXPROJ, "1.2.3", "10203", false).unwrap();

        assert_eq!(patched.matches("MARKETING_VERSION = 1.2.3;").count(), 2);
        assert_eq!(patched.matches("CURRENT_PROJECT_VERSION = 10203;").count(), 2);
        assert!(!patched.contains("MARKETING_VERSION = 1.0.0;"));
    }

    #[test]
    fn patch_tolerates_missing_whitespace_around_equals() {
        let updater = IosUpdater::new();

        let patched = updater
            .patch("MARKETING_VERSION=1.0;\nCURRENT_PROJECT_VERSION=4;", "2.0.0", "20000", false)
            .unwrap();

        assert_eq!(patched, "MARKETING_VERSION=2.0.0;\nCURRENT_PROJECT_VERSION=20000;");
    }

    #[test]
    fn patch_returns_none_without_version_settings() {
        let updater = IosUpdater::new();

        assert_eq!(
            updater.patch("archiveVersion = 1;", "1.2.3", "10203", false),
            None
        );
    }

    #[test]
    fn update_rewrites_pbxproj() {
        let project = project_with_pbxproj("testapp.xcodeproj", PBXPROJ);

        let outcome = IosUpdater::new()
            .update(project.path(), "1.2.3", code(10203), true)
            .unwrap();

        let path = project.path().join("ios/testapp.xcodeproj/project.pbxproj");
        assert_eq!(outcome, UpdateOutcome::Updated { path: path.clone() });
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("CURRENT_PROJECT_VERSION = 10203;"));
        assert!(content.contains("MARKETING_VERSION = 1.2.3;"));
    }

    #[test]
    fn update_skips_when_ios_dir_missing() {
        let project = TempDir::new().unwrap();

        let outcome = IosUpdater::new()
            .update(project.path(), "1.2.3", code(10203), false)
            .unwrap();

        assert_eq!(outcome, UpdateOutcome::Skipped);
    }

    #[test]
    fn update_skips_when_bundle_has_no_pbxproj() {
        let project = TempDir::new().unwrap();
        std::fs::create_dir_all(project.path().join("ios/testapp.xcodeproj")).unwrap();
        std::fs::create_dir_all(project.path().join("ios/Pods")).unwrap();

        let outcome = IosUpdater::new()
            .update(project.path(), "1.2.3", code(10203), false)
            .unwrap();

        assert_eq!(outcome, UpdateOutcome::Skipped);
    }

    #[test]
    fn update_ignores_files_named_like_bundles() {
        let project = TempDir::new().unwrap();
        std::fs::create_dir_all(project.path().join("ios")).unwrap();
        std::fs::write(project.path().join("ios/fake.xcodeproj"), PBXPROJ).unwrap();

        let outcome = IosUpdater::new()
            .update(project.path(), "1.2.3", code(10203), false)
            .unwrap();

        assert_eq!(outcome, UpdateOutcome::Skipped);
    }

    #[test]
    fn update_picks_first_bundle_in_name_order() {
        let project = project_with_pbxproj("b.xcodeproj", PBXPROJ);
        let first = project.path().join("ios/a.xcodeproj");
        std::fs::create_dir_all(&first).unwrap();
        std::fs::write(first.join("project.pbxproj"), PBXPROJ).unwrap();

        let outcome = IosUpdater::new()
            .update(project.path(), "1.2.3", code(10203), false)
            .unwrap();

        assert_eq!(
            outcome,
            UpdateOutcome::Updated {
                path: first.join("project.pbxproj")
            }
        );
        let untouched =
            std::fs::read_to_string(project.path().join("ios/b.xcodeproj/project.pbxproj"))
                .unwrap();
        assert_eq!(untouched, PBXPROJ);
    }
}
