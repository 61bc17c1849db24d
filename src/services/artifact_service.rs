//! Artifact service - moves packaged artifacts into the releases directory

use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("{} directory does not exist", .0.display())]
    MissingDist(PathBuf),

    #[error("No .{extension} file found in {}", .dir.display())]
    NoArtifact { dir: PathBuf, extension: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A relocated artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovedArtifact {
    pub name: String,
    pub size: u64,
    /// Companion `<name>.md`, when one was moved along
    pub companion: Option<String>,
}

/// First artifact in `dir` with the given extension, by file name
pub fn find_artifact(dir: &Path, extension: &str) -> Result<Option<String>, ArtifactError> {
    let mut names: Vec<String> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| {
            Path::new(name)
                .extension()
                .is_some_and(|ext| ext == extension)
        })
        .collect();
    names.sort();
    Ok(names.into_iter().next())
}

/// Move the artifact from `dist` to `releases`, creating `releases` if needed
pub fn move_to_releases(
    dist: &Path,
    releases: &Path,
    extension: &str,
) -> Result<MovedArtifact, ArtifactError> {
    if !dist.is_dir() {
        return Err(ArtifactError::MissingDist(dist.to_path_buf()));
    }

    let name = find_artifact(dist, extension)?.ok_or_else(|| ArtifactError::NoArtifact {
        dir: dist.to_path_buf(),
        extension: extension.to_string(),
    })?;

    std::fs::create_dir_all(releases)?;

    let destination = releases.join(&name);
    move_file(&dist.join(&name), &destination)?;
    let size = std::fs::metadata(&destination)?.len();

    let companion_name = format!("{}.md", name);
    let companion_source = dist.join(&companion_name);
    let companion = if companion_source.is_file() {
        move_file(&companion_source, &releases.join(&companion_name))?;
        Some(companion_name)
    } else {
        None
    };

    Ok(MovedArtifact {
        name,
        size,
        companion,
    })
}

/// Rename, falling back to copy + remove across filesystems
fn move_file(from: &Path, to: &Path) -> std::io::Result<()> {
    if std::fs::rename(from, to).is_ok() {
        return Ok(());
    }
    std::fs::copy(from, to)?;
    std::fs::remove_file(from)
}
