use std::path::{Path, PathBuf};

// =============================================================================
// Version code constants
// =============================================================================

/// Upper bound for a version code (inclusive).
///
/// Android `versionCode` and iOS `CURRENT_PROJECT_VERSION` are both stored as
/// 32-bit signed integers.
pub const MAX_VERSION_CODE: u32 = i32::MAX as u32;

// =============================================================================
// File locations (relative to the project root)
// =============================================================================

/// JavaScript package manifest holding the source-of-truth version
pub const PACKAGE_JSON: &str = "package.json";

/// Android app module build script
pub const ANDROID_BUILD_GRADLE: [&str; 3] = ["android", "app", "build.gradle"];

/// Directory containing the Xcode project bundle
pub const IOS_DIR: &str = "ios";

/// Suffix of the Xcode project bundle directory
pub const XCODEPROJ_SUFFIX: &str = ".xcodeproj";

/// Build settings file inside the Xcode project bundle
pub const PBXPROJ_FILE: &str = "project.pbxproj";

/// Options for a single sync invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// Emit informational lines for each resolution and file update
    pub verbose: bool,
    /// Explicit version code, bypassing the semver formula
    pub version_code: Option<i64>,
}

impl SyncOptions {
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn version_code(mut self, version_code: Option<i64>) -> Self {
        self.version_code = version_code;
        self
    }
}

/// Returns the path to the package manifest under `project_root`.
pub fn package_json_path(project_root: &Path) -> PathBuf {
    project_root.join(PACKAGE_JSON)
}

/// Returns the path to the Android build script under `project_root`.
pub fn build_gradle_path(project_root: &Path) -> PathBuf {
    ANDROID_BUILD_GRADLE
        .iter()
        .fold(project_root.to_path_buf(), |path, segment| path.join(segment))
}

/// Returns the path to the iOS project directory under `project_root`.
pub fn ios_dir(project_root: &Path) -> PathBuf {
    project_root.join(IOS_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_version_code_matches_signed_32_bit_limit() {
        assert_eq!(MAX_VERSION_CODE, 2_147_483_647);
    }

    #[test]
    fn sync_options_default_is_quiet_without_override() {
        let options = SyncOptions::default();

        assert!(!options.verbose);
        assert_eq!(options.version_code, None);
    }

    #[test]
    fn sync_options_builder_sets_fields() {
        let options = SyncOptions::default().verbose(true).version_code(Some(42));

        assert_eq!(
            options,
            SyncOptions {
                verbose: true,
                version_code: Some(42),
            }
        );
    }

    #[test]
    fn build_gradle_path_points_at_app_module() {
        let path = build_gradle_path(Path::new("/project"));

        assert_eq!(path, PathBuf::from("/project/android/app/build.gradle"));
    }

    #[test]
    fn package_json_path_is_at_project_root() {
        let path = package_json_path(Path::new("/project"));

        assert_eq!(path, PathBuf::from("/project/package.json"));
    }
}
