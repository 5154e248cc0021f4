//! Keep a React Native app's native version metadata in sync with package.json.
//!
//! The `version` field of package.json is written to Android's `versionName`
//! and iOS's `MARKETING_VERSION`. A build number derived from it
//! (`10000*major + 100*minor + patch`), or supplied explicitly, is written to
//! Android's `versionCode` and iOS's `CURRENT_PROJECT_VERSION`.
//!
//! ```text
//! package.json ──▶ manifest ──▶ version ──▶ sync ──┬──▶ platform::android
//!                                                  └──▶ platform::ios
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod platform;
pub mod sync;
pub mod version;

pub use config::SyncOptions;
pub use error::SyncError;
pub use sync::{SyncReport, Synchronizer, sync_versions};
pub use version::{SemanticVersion, VersionCode, calculate_version_code, parse_semver};
