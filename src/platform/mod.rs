//! Native project updaters
//! - traits.rs: PlatformUpdater trait definition
//! - types.rs: Common types (Platform, UpdateOutcome)
//! - android.rs: android/app/build.gradle updater
//! - ios.rs: ios/*.xcodeproj/project.pbxproj updater

pub mod android;
pub mod ios;
pub mod traits;
pub mod types;

pub use android::AndroidUpdater;
pub use ios::IosUpdater;
pub use traits::PlatformUpdater;
pub use types::{Platform, UpdateOutcome};
