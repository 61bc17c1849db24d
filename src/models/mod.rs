pub mod badge;
pub mod changes;
pub mod config;
pub mod manifest;

pub use badge::{BadgeState, StateDescriptor, UnknownState};
pub use changes::{plural, ChangeSummary, VERSION_BUMP_ONLY};
pub use config::{ReleaseConfig, StatusConfig, CONFIG_FILE};
pub use manifest::{bump_version, BumpLevel, ManifestError, PackageManifest};
