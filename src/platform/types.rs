//! Common types for platform updaters

use std::fmt;
use std::path::PathBuf;

/// Native platform targeted by an updater
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Gradle build script (android/app/build.gradle)
    Android,
    /// Xcode project (ios/*.xcodeproj/project.pbxproj)
    Ios,
}

impl Platform {
    /// Returns the display name of the platform
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "Android",
            Platform::Ios => "iOS",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an updater did to its native project
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The native project file does not exist
    Skipped,
    /// The file exists but already holds the requested values, or has no
    /// recognisable version fields
    Unchanged { path: PathBuf },
    /// The file was rewritten
    Updated { path: PathBuf },
}

impl UpdateOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, UpdateOutcome::Updated { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, UpdateOutcome::Skipped)
    }
}
