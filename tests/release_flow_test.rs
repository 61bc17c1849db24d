//! Integration tests for the release commands
//!
//! Each test builds a scratch project (manifest, changelog, memory log and a
//! git repository) and runs the commands against it.

use git2::{Commit, Repository, Signature};
use shipmate::models::{BadgeState, PackageManifest, ReleaseConfig};
use shipmate::ReleaseContext;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CHANGELOG: &str = "# Changelog\n\n## Unreleased\n\n- Status badge remembers its state\n\n## [1.0.0] - 2026-01-10\n\n- First release\n";

const MEMORY: &str = "# Memory\n\n## Current Focus\n\n### Last Query: Badge work\n**Time**: earlier\n\n## Sub-tasks Tracking\n\n| ID  | Task | Status | Notes |\n|-----|------|--------|-------|\n| 1   | Setup | Complete | - |\n| 2   | Badge | Complete | - |\n\n---\n\n## Notes\n\n- keep\n";

fn write(root: &Path, path: &str, content: &str) {
    let full = root.join(path);
    fs::create_dir_all(full.parent().unwrap()).unwrap();
    fs::write(full, content).unwrap();
}

fn commit_all(repo: &Repository, message: &str) {
    let mut index = repo.index().unwrap();
    index
        .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
        .unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();

    let sig = Signature::now("Test", "test@example.com").unwrap();
    let parents: Vec<Commit> = repo
        .head()
        .ok()
        .and_then(|head| head.peel_to_commit().ok())
        .into_iter()
        .collect();
    let parent_refs: Vec<&Commit> = parents.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .unwrap();
}

fn tag_head(repo: &Repository, name: &str) {
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    repo.tag_lightweight(name, head.as_object(), false).unwrap();
}

/// Project at v1.0.0, tagged, with one unreleased source change committed
fn setup_project() -> (TempDir, Repository, ReleaseContext) {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "package.json", "{\n  \"name\": \"demo\",\n  \"version\": \"1.0.0\"\n}\n");
    write(root, "CHANGELOG.md", CHANGELOG);
    write(root, "docs/MEMORY.md", MEMORY);
    write(root, "src/index.ts", "export const badge = 1;\n");
    write(root, ".gitignore", ".shipmate/\n");

    let repo = Repository::init(root).unwrap();
    commit_all(&repo, "initial");
    tag_head(&repo, "v1.0.0");

    write(root, "src/index.ts", "export const badge = 2;\n");
    commit_all(&repo, "badge persistence");

    let ctx = ReleaseContext::new(root.to_path_buf(), ReleaseConfig::default());
    ctx.attach_status();
    (temp, repo, ctx)
}

#[test]
fn test_release_pipeline() {
    let (temp, _repo, ctx) = setup_project();
    let root = temp.path();

    shipmate::cli::release::run(&ctx).unwrap();

    let manifest = PackageManifest::load(root.join("package.json")).unwrap();
    assert_eq!(manifest.version().to_string(), "1.0.1");

    let changelog = fs::read_to_string(root.join("CHANGELOG.md")).unwrap();
    assert!(changelog.starts_with("# Changelog\n\n## Unreleased\n\nNothing yet\n\n## [1.0.1] - "));
    assert!(changelog.contains("- Status badge remembers its state\n\n## [1.0.0] - 2026-01-10"));

    // v1.0.1 is not tagged yet, so v1.0.0 is the previous release
    let memory = fs::read_to_string(root.join("docs/MEMORY.md")).unwrap();
    assert!(memory.contains("| 3   | Release v1.0.1 "));
    assert!(memory.contains("| Release v1.0.1 - 1 source file modified (since v1.0.0) |"));
    assert!(memory.contains("### Last Query: Release v1.0.1\n"));
    assert!(memory.ends_with("## Notes\n\n- keep\n"));

    assert_eq!(ctx.status.state(), BadgeState::Processing);
    assert_eq!(
        fs::read_to_string(root.join(".shipmate/project-status")).unwrap(),
        "processing"
    );
}

#[test]
fn test_release_diffs_against_newest_tag() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "package.json", "{\n  \"name\": \"demo\",\n  \"version\": \"0.9.0\"\n}\n");
    write(root, "CHANGELOG.md", CHANGELOG);
    write(root, "docs/MEMORY.md", MEMORY);
    write(root, "README.md", "# Demo\n");
    write(root, ".gitignore", ".shipmate/\n");

    let repo = Repository::init(root).unwrap();
    commit_all(&repo, "initial");
    tag_head(&repo, "v0.9.0");

    write(root, "README.md", "# Demo\n\nNow with a badge\n");
    write(root, "package.json", "{\n  \"name\": \"demo\",\n  \"version\": \"1.0.0\"\n}\n");
    commit_all(&repo, "v1.0.0");
    tag_head(&repo, "v1.0.0");

    write(root, "src/index.ts", "export const badge = 2;\n");
    commit_all(&repo, "badge persistence");

    let ctx = ReleaseContext::new(root.to_path_buf(), ReleaseConfig::default());
    shipmate::cli::release::run(&ctx).unwrap();

    // The README and manifest changes shipped in v1.0.0 and are not counted again
    let memory = fs::read_to_string(root.join("docs/MEMORY.md")).unwrap();
    assert!(memory.contains("| Release v1.0.1 - 1 source file modified (since v1.0.0) |"));
    assert!(!memory.contains("since v0.9.0"));
}

#[test]
fn test_memory_since_previous_tag() {
    let (temp, repo, ctx) = setup_project();
    let root = temp.path();

    shipmate::cli::bump::run(&ctx, shipmate::models::BumpLevel::Patch).unwrap();
    write(root, "docs/guide.md", "# Guide\n");
    commit_all(&repo, "v1.0.1");
    tag_head(&repo, "v1.0.1");

    let task = shipmate::cli::memory::run(&ctx).unwrap();
    assert_eq!(task, 3);

    let memory = fs::read_to_string(root.join("docs/MEMORY.md")).unwrap();
    assert!(memory.contains(
        "| Release v1.0.1 - 1 source file modified, 1 doc file updated, 1 config file changed (since v1.0.0) |"
    ));
}

#[test]
fn test_move_to_releases() {
    let (temp, _repo, ctx) = setup_project();
    let root = temp.path();
    write(root, "dist/demo-1.0.1.tgz", "tarball");

    let moved = shipmate::cli::releases::run(&ctx).unwrap();
    assert_eq!(moved.name, "demo-1.0.1.tgz");
    assert_eq!(moved.companion, None);
    assert!(root.join("releases/demo-1.0.1.tgz").exists());
    assert!(!root.join("dist/demo-1.0.1.tgz").exists());
}

#[test]
fn test_move_without_dist_fails() {
    let (_temp, _repo, ctx) = setup_project();
    let err = shipmate::cli::releases::run(&ctx).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn test_config_redirects_paths() {
    let (temp, _repo, _ctx) = setup_project();
    let root = temp.path();
    fs::rename(root.join("CHANGELOG.md"), root.join("HISTORY.md")).unwrap();
    write(root, "shipmate.toml", "changelog = \"HISTORY.md\"\n");

    let ctx = ReleaseContext::load(Some(root)).unwrap();
    shipmate::cli::changelog::run(&ctx).unwrap();

    let history = fs::read_to_string(root.join("HISTORY.md")).unwrap();
    assert!(history.contains("## [1.0.1] - "));
}
