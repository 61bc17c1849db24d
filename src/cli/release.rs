use super::changelog::ChangelogOutcome;
use crate::context::ReleaseContext;
use crate::models::BumpLevel;
use crate::Result;
use colored::Colorize;

/// Prepare a patch release: changelog, version bump, memory log
pub fn run(ctx: &ReleaseContext) -> Result<()> {
    println!("{}", "🚀 Preparing patch release...".cyan().bold());
    println!();

    if super::changelog::run(ctx)? == ChangelogOutcome::Skipped {
        println!("   Continuing without a changelog entry");
    }
    println!();

    let version = super::bump::run(ctx, BumpLevel::Patch)?;
    super::memory::run(ctx)?;

    println!();
    println!("{}", format!("✅ Release v{} prepared", version).green().bold());
    Ok(())
}
