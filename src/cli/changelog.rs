use crate::context::{note_status, ReleaseContext};
use crate::models::PackageManifest;
use crate::parser::changelog::{roll_unreleased, verify_rollover, Rollover};
use crate::Result;
use anyhow::Context;
use colored::Colorize;
use semver::Version;

/// Result of the changelog step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangelogOutcome {
    Updated(Version),
    /// Unreleased section was empty; nothing written
    Skipped,
}

/// Roll the Unreleased section into a section for the next patch version
pub fn run(ctx: &ReleaseContext) -> Result<ChangelogOutcome> {
    println!("{}", "📝 Updating CHANGELOG for release...".cyan());
    note_status(ctx.status.set_processing(Some("Updating CHANGELOG...")));

    let manifest = PackageManifest::load(ctx.path(&ctx.config.manifest))?;
    let version = manifest.next_patch();

    let changelog_path = ctx.path(&ctx.config.changelog);
    let content = std::fs::read_to_string(&changelog_path)
        .with_context(|| format!("Failed to read {}", changelog_path.display()))?;

    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
    let updated = match roll_unreleased(&content, &version, &today)? {
        Rollover::Rolled(updated) => updated,
        Rollover::Empty => {
            println!(
                "{}",
                "⚠️  Unreleased section is empty or only contains \"Nothing yet\"".yellow()
            );
            println!("   Skipping changelog update - no changes to document");
            return Ok(ChangelogOutcome::Skipped);
        }
    };

    println!(
        "📋 Found changes in Unreleased section for predicted version {}",
        version.to_string().green()
    );

    std::fs::write(&changelog_path, &updated)
        .with_context(|| format!("Failed to write {}", changelog_path.display()))?;

    println!(
        "{}",
        format!(
            "✓ Updated {} with version {} (dated {})",
            ctx.config.changelog.display(),
            version,
            today
        )
        .green()
    );
    println!("{}", "✓ Added new empty \"Unreleased\" section for next release".green());

    let written = std::fs::read_to_string(&changelog_path)?;
    if !verify_rollover(&written, &version) {
        anyhow::bail!("CHANGELOG update verification failed");
    }
    println!("{}", "✨ CHANGELOG update verified successfully".green().bold());

    Ok(ChangelogOutcome::Updated(version))
}
