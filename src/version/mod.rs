//! Version resolution
//!
//! Pure functions that turn a semver string into a bounded platform build
//! number, or validate a caller-supplied one. No I/O happens here.
//!
//! # Modules
//!
//! - [`semver`]: MAJOR.MINOR.PATCH parsing with pre-release/build stripping
//! - [`code`]: `VersionCode` derivation, bounds and override precedence

pub mod code;
pub mod semver;

pub use code::{Provenance, VersionCode, calculate_version_code, resolve_version_code};
pub use semver::{SemanticVersion, parse_semver};
