use crate::context::{note_status, ReleaseContext};
use crate::services::{move_to_releases, ArtifactError, MovedArtifact};
use crate::Result;
use colored::Colorize;

/// Move the packaged artifact from the dist directory into releases
pub fn run(ctx: &ReleaseContext) -> Result<MovedArtifact> {
    let config = &ctx.config;
    println!(
        "{}",
        format!("📦 Moving package to {}/ directory...", config.releases_dir.display()).cyan()
    );
    note_status(ctx.status.set_processing(Some("Moving package...")));

    let moved = match move_to_releases(
        &ctx.path(&config.dist_dir),
        &ctx.path(&config.releases_dir),
        &config.artifact_extension,
    ) {
        Ok(moved) => moved,
        Err(e @ ArtifactError::MissingDist(_)) => {
            eprintln!("{}", format!("❌ {}", e).red());
            eprintln!("   Please run the package step first");
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    let releases = config.releases_dir.display();
    println!("{}", format!("✓ Moved {} to {}/ directory", moved.name, releases).green());
    println!("{}", format!("✓ New location: {}/{}", releases, moved.name).green());
    println!("{}", format!("✓ Size: {} bytes", moved.size).green());
    if let Some(companion) = &moved.companion {
        println!("{}", format!("✓ Moved {} to {}/ directory", companion, releases).green());
    }
    println!("{}", "\n✨ Release package moved successfully\n".green().bold());

    Ok(moved)
}
