//! Per-invocation context: project root, configuration and the status badge

use crate::models::ReleaseConfig;
use crate::state::{FileStatusStore, StoreError};
use crate::ui::status::{BadgeSurface, LogSurface, PulseSettings, StatusHandle, StatusIndicator};
use crate::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Everything a command needs to know about the project it runs in
#[derive(Debug, Clone)]
pub struct ReleaseContext {
    pub project_root: PathBuf,
    pub config: ReleaseConfig,
    /// Badge façade; detached until [`ReleaseContext::attach_status`] runs
    pub status: StatusHandle,
}

impl ReleaseContext {
    /// Load the context for `project_root`, defaulting to the current directory
    pub fn load(project_root: Option<&Path>) -> Result<Self> {
        let project_root = match project_root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir().context("Failed to resolve current directory")?,
        };
        let config = ReleaseConfig::load(&project_root)
            .with_context(|| format!("Failed to load {}", crate::models::CONFIG_FILE))?;

        Ok(Self::new(project_root, config))
    }

    pub fn new(project_root: PathBuf, config: ReleaseConfig) -> Self {
        Self {
            project_root,
            config,
            status: StatusHandle::detached(),
        }
    }

    /// Resolve a configured path against the project root
    pub fn path(&self, relative: &Path) -> PathBuf {
        self.project_root.join(relative)
    }

    pub fn status_store(&self) -> FileStatusStore {
        FileStatusStore::new(self.path(&self.config.status.store))
    }

    pub fn pulse_settings(&self) -> PulseSettings {
        PulseSettings::from(&self.config.status)
    }

    /// Build the indicator on `surface` and attach it to the façade
    pub fn init_indicator(
        &self,
        surface: Option<Arc<dyn BadgeSurface>>,
    ) -> std::result::Result<StatusIndicator, StoreError> {
        let indicator =
            StatusIndicator::init(surface, Arc::new(self.status_store()), self.pulse_settings())?;
        self.status.attach(indicator.clone());
        Ok(indicator)
    }

    /// Attach a headless badge so release commands record their progress
    pub fn attach_status(&self) {
        let surface: Arc<dyn BadgeSurface> = Arc::new(LogSurface);
        if let Err(e) = self.init_indicator(Some(surface)) {
            tracing::warn!("status badge unavailable: {}", e);
        }
    }
}

/// Badge updates never fail a release; store errors are only logged
pub fn note_status(result: std::result::Result<(), StoreError>) {
    if let Err(e) = result {
        tracing::warn!("failed to record status: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BadgeState;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults() {
        let temp = TempDir::new().unwrap();
        let ctx = ReleaseContext::load(Some(temp.path())).unwrap();
        assert_eq!(ctx.path(&ctx.config.changelog), temp.path().join("CHANGELOG.md"));
        assert!(!ctx.status.is_attached());
    }

    #[test]
    fn test_attach_status_persists_progress() {
        let temp = TempDir::new().unwrap();
        let ctx = ReleaseContext::load(Some(temp.path())).unwrap();
        ctx.attach_status();
        assert!(ctx.status.is_attached());

        note_status(ctx.status.set_processing(Some("Updating CHANGELOG...")));
        assert_eq!(ctx.status.state(), BadgeState::Processing);
        assert_eq!(
            std::fs::read_to_string(temp.path().join(".shipmate/project-status")).unwrap(),
            "processing"
        );
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("shipmate.toml"), "manifest = [").unwrap();
        assert!(ReleaseContext::load(Some(temp.path())).is_err());
    }
}
