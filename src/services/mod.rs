//! Service layer for shipmate
//!
//! Repository and filesystem operations shared by the CLI commands.

pub mod artifact_service;
pub mod git_service;

pub use artifact_service::{find_artifact, move_to_releases, ArtifactError, MovedArtifact};
pub use git_service::{load_history, previous_release_tag, release_tags, ReleaseHistory};
