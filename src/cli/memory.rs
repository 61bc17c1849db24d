use crate::context::{note_status, ReleaseContext};
use crate::models::{plural, PackageManifest};
use crate::parser::memory::{record_release, ReleaseEntry};
use crate::services::load_history;
use crate::Result;
use anyhow::Context;
use colored::Colorize;

/// Record the current manifest version in the memory log
///
/// Returns the number of the task row that was added.
pub fn run(ctx: &ReleaseContext) -> Result<u32> {
    let manifest = PackageManifest::load(ctx.path(&ctx.config.manifest))?;
    let version = manifest.version().clone();

    println!("{}", format!("\n📦 Preparing release for v{}...", version).cyan());
    note_status(ctx.status.set_processing(Some("Updating memory log...")));

    let history = load_history(&ctx.project_root, &version, &ctx.config.tag_prefix)?;
    let change_notes = history.change_notes();

    match &history.previous_tag {
        Some(tag) => {
            println!("📋 Analyzing changes since {}...", tag);
            println!("   - {} {}", history.commits, plural(history.commits, "commit"));
            println!(
                "   - {} {} changed",
                history.changed_files.len(),
                plural(history.changed_files.len(), "file")
            );
            println!("   - {}", change_notes);
        }
        None => println!("   - No previous tag found, treating as simple version bump"),
    }
    println!("\n📝 Change notes: {}", change_notes);

    let memory_path = ctx.path(&ctx.config.memory);
    let content = std::fs::read_to_string(&memory_path)
        .with_context(|| format!("Failed to read {}", memory_path.display()))?;

    let entry = ReleaseEntry {
        version: version.clone(),
        change_notes,
        previous_tag: history.previous_tag.clone(),
    };
    let update = record_release(&content, &entry, chrono::Utc::now())?;

    std::fs::write(&memory_path, &update.content)
        .with_context(|| format!("Failed to write {}", memory_path.display()))?;

    println!(
        "{}",
        format!(
            "✓ Updated {} with task t{} for v{}",
            ctx.config.memory.display(),
            update.task_number,
            version
        )
        .green()
    );
    if !update.focus_updated {
        println!("{}", "⚠️  No Current Focus section found, left unchanged".yellow());
    }
    println!("{}", "✨ Ready for build and package".green().bold());

    Ok(update.task_number)
}
