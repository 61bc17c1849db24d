use crate::context::{note_status, ReleaseContext};
use crate::models::{BumpLevel, PackageManifest};
use crate::Result;
use colored::Colorize;
use semver::Version;

/// Bump the manifest version and write it back
pub fn run(ctx: &ReleaseContext, level: BumpLevel) -> Result<Version> {
    note_status(ctx.status.set_updating());

    let mut manifest = PackageManifest::load(ctx.path(&ctx.config.manifest))?;
    let previous = manifest.version().clone();
    let next = manifest.bump(level).clone();
    manifest.save()?;

    println!(
        "{}",
        format!("🔖 Bumped version: {} → {}", previous, next).green()
    );

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReleaseConfig;
    use tempfile::TempDir;

    #[test]
    fn test_bump_writes_manifest() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("package.json"),
            "{\n  \"name\": \"demo\",\n  \"version\": \"1.9.9\"\n}\n",
        )
        .unwrap();
        let ctx = ReleaseContext::new(temp.path().to_path_buf(), ReleaseConfig::default());

        assert_eq!(run(&ctx, BumpLevel::Patch).unwrap(), Version::new(1, 9, 10));
        assert_eq!(run(&ctx, BumpLevel::Minor).unwrap(), Version::new(1, 10, 0));

        let manifest = PackageManifest::load(temp.path().join("package.json")).unwrap();
        assert_eq!(manifest.version(), &Version::new(1, 10, 0));
    }

    #[test]
    fn test_missing_manifest_fails() {
        let temp = TempDir::new().unwrap();
        let ctx = ReleaseContext::new(temp.path().to_path_buf(), ReleaseConfig::default());
        assert!(run(&ctx, BumpLevel::Patch).is_err());
    }
}
