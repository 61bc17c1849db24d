//! Git service - release tag history and changes since the previous release

use crate::models::{ChangeSummary, VERSION_BUMP_ONLY};
use crate::Result;
use anyhow::Context;
use git2::{Repository, Sort};
use semver::Version;
use std::cmp::Ordering;
use std::path::Path;

/// What changed between the previous release tag and HEAD
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseHistory {
    pub previous_tag: Option<String>,
    pub commits: usize,
    pub changed_files: Vec<String>,
}

impl ReleaseHistory {
    pub fn summary(&self) -> ChangeSummary {
        ChangeSummary::from_paths(&self.changed_files)
    }

    /// Change notes for the memory log
    pub fn change_notes(&self) -> String {
        if self.previous_tag.is_none() {
            return VERSION_BUMP_ONLY.to_string();
        }
        self.summary().notes()
    }
}

fn tag_version(tag: &str, prefix: &str) -> Option<Version> {
    Version::parse(tag.strip_prefix(prefix)?).ok()
}

/// Newest first; tags that are not semver sort last
fn compare_tags(a: &str, b: &str, prefix: &str) -> Ordering {
    match (tag_version(a, prefix), tag_version(b, prefix)) {
        (Some(va), Some(vb)) => vb.cmp(&va),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.cmp(a),
    }
}

/// Release tags (`<prefix>*`), newest version first
pub fn release_tags(repo: &Repository, prefix: &str) -> Result<Vec<String>> {
    let names = repo
        .tag_names(Some(&format!("{}*", prefix)))
        .context("Failed to list tags")?;
    let mut tags: Vec<String> = names.iter().flatten().map(str::to_string).collect();
    tags.sort_by(|a, b| compare_tags(a, b, prefix));
    Ok(tags)
}

/// Pick the tag to diff against.
///
/// The newest tag is the previous release unless it already names the
/// version being recorded, in which case the one before it is used. A lone
/// tag for the current version is used only when it sits on a root commit.
pub fn previous_release_tag(
    repo: &Repository,
    tags: &[String],
    current: &Version,
    prefix: &str,
) -> Result<Option<String>> {
    let current_tag = format!("{}{}", prefix, current);
    match tags {
        [newest, ..] if *newest != current_tag => Ok(Some(newest.clone())),
        [_, previous, ..] => Ok(Some(previous.clone())),
        [only] => {
            let commit = repo
                .revparse_single(&format!("refs/tags/{}", only))?
                .peel_to_commit()?;
            Ok((commit.parent_count() == 0).then(|| only.clone()))
        }
        [] => Ok(None),
    }
}

/// Collect release history for the repository containing `project_root`
pub fn load_history(project_root: &Path, current: &Version, prefix: &str) -> Result<ReleaseHistory> {
    let repo = Repository::discover(project_root)
        .with_context(|| format!("Not a git repository: {}", project_root.display()))?;

    let tags = release_tags(&repo, prefix)?;
    let Some(previous_tag) = previous_release_tag(&repo, &tags, current, prefix)? else {
        return Ok(ReleaseHistory::default());
    };

    let tag_commit = repo
        .revparse_single(&format!("refs/tags/{}", previous_tag))?
        .peel_to_commit()
        .with_context(|| format!("Tag {} does not point at a commit", previous_tag))?;
    let head = repo
        .head()
        .context("Failed to resolve HEAD")?
        .peel_to_commit()?;

    let mut walk = repo.revwalk()?;
    walk.set_sorting(Sort::TOPOLOGICAL)?;
    walk.push(head.id())?;
    walk.hide(tag_commit.id())?;
    let commits = walk.count();

    let diff = repo.diff_tree_to_tree(Some(&tag_commit.tree()?), Some(&head.tree()?), None)?;
    let changed_files = diff
        .deltas()
        .filter_map(|delta| delta.new_file().path().or_else(|| delta.old_file().path()))
        .map(|path| path.to_string_lossy().into_owned())
        .collect();

    Ok(ReleaseHistory {
        previous_tag: Some(previous_tag),
        commits,
        changed_files,
    })
}
