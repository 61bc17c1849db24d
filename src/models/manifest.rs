//! Package manifest (`package.json`) version handling

use semver::{BuildMetadata, Prerelease, Version};
use serde_json::Value;
use std::path::PathBuf;

/// Errors that can occur when reading or writing the manifest
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read manifest '{}': {}", .0.display(), .1)]
    Read(PathBuf, std::io::Error),

    #[error("Failed to write manifest '{}': {}", .0.display(), .1)]
    Write(PathBuf, std::io::Error),

    #[error("Failed to parse manifest JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Manifest has no string \"version\" field")]
    MissingVersion,

    #[error("Invalid version '{0}': {1}")]
    InvalidVersion(String, semver::Error),
}

/// Which version component to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BumpLevel {
    Major,
    Minor,
    #[default]
    Patch,
}

/// Increment a version, resetting lower components and dropping pre-release/build
pub fn bump_version(version: &Version, level: BumpLevel) -> Version {
    let mut next = version.clone();
    match level {
        BumpLevel::Major => {
            next.major += 1;
            next.minor = 0;
            next.patch = 0;
        }
        BumpLevel::Minor => {
            next.minor += 1;
            next.patch = 0;
        }
        BumpLevel::Patch => next.patch += 1,
    }
    next.pre = Prerelease::EMPTY;
    next.build = BuildMetadata::EMPTY;
    next
}

/// A loaded manifest; unknown fields are kept in their original order
#[derive(Debug, Clone)]
pub struct PackageManifest {
    path: PathBuf,
    document: Value,
    version: Version,
}

impl PackageManifest {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ManifestError> {
        let path = path.into();
        let content =
            std::fs::read_to_string(&path).map_err(|e| ManifestError::Read(path.clone(), e))?;
        let document: Value = serde_json::from_str(&content)?;

        let raw = document
            .get("version")
            .and_then(Value::as_str)
            .ok_or(ManifestError::MissingVersion)?;
        let version = Version::parse(raw.trim_start_matches('v'))
            .map_err(|e| ManifestError::InvalidVersion(raw.to_string(), e))?;

        Ok(Self {
            path,
            document,
            version,
        })
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Version the next patch release will carry
    pub fn next_patch(&self) -> Version {
        bump_version(&self.version, BumpLevel::Patch)
    }

    /// Bump the version in memory; call `save` to persist
    pub fn bump(&mut self, level: BumpLevel) -> &Version {
        self.set_version(bump_version(&self.version, level));
        &self.version
    }

    pub fn set_version(&mut self, version: Version) {
        if let Some(map) = self.document.as_object_mut() {
            map.insert("version".to_string(), Value::String(version.to_string()));
        }
        self.version = version;
    }

    pub fn save(&self) -> Result<(), ManifestError> {
        let mut content = serde_json::to_string_pretty(&self.document)?;
        content.push('\n');
        std::fs::write(&self.path, content).map_err(|e| ManifestError::Write(self.path.clone(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_manifest(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("package.json");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_next_patch() {
        let temp = TempDir::new().unwrap();
        let path = write_manifest(&temp, r#"{"name": "demo", "version": "1.4.9"}"#);

        let manifest = PackageManifest::load(&path).unwrap();
        assert_eq!(manifest.next_patch().to_string(), "1.4.10");
        assert_eq!(manifest.version().to_string(), "1.4.9");
    }

    #[test]
    fn test_bump_levels() {
        let v = Version::parse("2.3.4-beta.1+sha.abc").unwrap();
        assert_eq!(bump_version(&v, BumpLevel::Patch).to_string(), "2.3.5");
        assert_eq!(bump_version(&v, BumpLevel::Minor).to_string(), "2.4.0");
        assert_eq!(bump_version(&v, BumpLevel::Major).to_string(), "3.0.0");
    }

    #[test]
    fn test_save_preserves_key_order() {
        let temp = TempDir::new().unwrap();
        let path = write_manifest(
            &temp,
            "{\n  \"name\": \"demo\",\n  \"version\": \"0.1.0\",\n  \"scripts\": {\n    \"build\": \"tsc\"\n  }\n}\n",
        );

        let mut manifest = PackageManifest::load(&path).unwrap();
        manifest.bump(BumpLevel::Minor);
        manifest.save().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "{\n  \"name\": \"demo\",\n  \"version\": \"0.2.0\",\n  \"scripts\": {\n    \"build\": \"tsc\"\n  }\n}\n"
        );
    }

    #[test]
    fn test_missing_version() {
        let temp = TempDir::new().unwrap();
        let path = write_manifest(&temp, r#"{"name": "demo"}"#);
        assert!(matches!(
            PackageManifest::load(&path),
            Err(ManifestError::MissingVersion)
        ));
    }

    #[test]
    fn test_invalid_version() {
        let temp = TempDir::new().unwrap();
        let path = write_manifest(&temp, r#"{"version": "one.two"}"#);
        assert!(matches!(
            PackageManifest::load(&path),
            Err(ManifestError::InvalidVersion(_, _))
        ));
    }
}
