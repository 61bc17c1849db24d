//! Project configuration (`shipmate.toml`)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "shipmate.toml";

/// Release tooling configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    /// Package manifest holding the version field
    pub manifest: PathBuf,

    /// Changelog with an `## Unreleased` section
    pub changelog: PathBuf,

    /// Memory log with the sub-task table
    pub memory: PathBuf,

    /// Where the packager drops artifacts
    pub dist_dir: PathBuf,

    /// Where released artifacts are kept
    pub releases_dir: PathBuf,

    /// Artifact file extension, without the dot
    pub artifact_extension: String,

    /// Prefix of release tags (`v1.2.3`)
    pub tag_prefix: String,

    /// Status badge settings
    pub status: StatusConfig,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from("package.json"),
            changelog: PathBuf::from("CHANGELOG.md"),
            memory: PathBuf::from("docs/MEMORY.md"),
            dist_dir: PathBuf::from("dist"),
            releases_dir: PathBuf::from("releases"),
            artifact_extension: "tgz".to_string(),
            tag_prefix: "v".to_string(),
            status: StatusConfig::default(),
        }
    }
}

/// Status badge settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// File holding the last badge state
    pub store: PathBuf,

    /// Length of one animation tick in milliseconds
    pub tick_ms: u64,

    /// The pulse stops once this many ticks have passed
    pub pulse_ticks: u32,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            store: PathBuf::from(".shipmate/project-status"),
            tick_ms: 1000,
            pulse_ticks: 6,
        }
    }
}

impl StatusConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl ReleaseConfig {
    /// Load config from shipmate.toml, falling back to defaults
    pub fn load(project_root: &Path) -> anyhow::Result<Self> {
        let config_path = project_root.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: ReleaseConfig = toml::from_str(&content)?;
        if config.status.tick_ms == 0 {
            anyhow::bail!("[status] tick_ms must be greater than zero");
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = ReleaseConfig::load(temp.path()).unwrap();
        assert_eq!(config, ReleaseConfig::default());
        assert_eq!(config.status.tick(), Duration::from_secs(1));
        assert_eq!(config.status.pulse_ticks, 6);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILE),
            "changelog = \"HISTORY.md\"\n\n[status]\ntick_ms = 250\n",
        )
        .unwrap();

        let config = ReleaseConfig::load(temp.path()).unwrap();
        assert_eq!(config.changelog, PathBuf::from("HISTORY.md"));
        assert_eq!(config.manifest, PathBuf::from("package.json"));
        assert_eq!(config.status.tick_ms, 250);
        assert_eq!(config.status.pulse_ticks, 6);
    }

    #[test]
    fn test_zero_tick_is_rejected() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE), "[status]\ntick_ms = 0\n").unwrap();

        let err = ReleaseConfig::load(temp.path()).unwrap_err();
        assert!(err.to_string().contains("tick_ms must be greater than zero"));
    }

    #[test]
    fn test_largest_pulse_count_loads() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILE),
            format!("[status]\npulse_ticks = {}\n", u32::MAX),
        )
        .unwrap();

        let config = ReleaseConfig::load(temp.path()).unwrap();
        assert_eq!(config.status.pulse_ticks, u32::MAX);
    }
}
