//! CHANGELOG.md roll-over: turns the `## Unreleased` section into a dated release

use regex::Regex;
use semver::Version;
use std::sync::LazyLock;

static UNRELEASED_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^##[ \t]+Unreleased[ \t]*\r?$").expect("unreleased heading pattern")
});

static LEVEL_TWO_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^##[ \t]").expect("level-two heading pattern"));

static NOTHING_YET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mi)^Nothing yet\.?[ \t]*$").expect("placeholder pattern"));

pub const EMPTY_UNRELEASED: &str = "## Unreleased\n\nNothing yet";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChangelogError {
    #[error("Could not find \"Unreleased\" section in changelog")]
    MissingUnreleased,
}

/// Byte range of the Unreleased section
struct UnreleasedSection {
    /// Start of the heading line
    start: usize,
    /// Start of the body (after the heading line)
    body_start: usize,
    /// Start of the next level-2 heading, or end of input
    end: usize,
}

fn find_unreleased(content: &str) -> Option<UnreleasedSection> {
    let heading = UNRELEASED_HEADING.find(content)?;
    let body_start = content[heading.end()..]
        .find('\n')
        .map(|i| heading.end() + i + 1)
        .unwrap_or(content.len());
    let end = LEVEL_TWO_HEADING
        .find_at(content, body_start)
        .map(|m| m.start())
        .unwrap_or(content.len());

    Some(UnreleasedSection {
        start: heading.start(),
        body_start,
        end,
    })
}

/// Body of the Unreleased section with "Nothing yet" placeholders removed
pub fn unreleased_notes(content: &str) -> Result<String, ChangelogError> {
    let section = find_unreleased(content).ok_or(ChangelogError::MissingUnreleased)?;
    let body = &content[section.body_start..section.end];
    Ok(NOTHING_YET.replace_all(body, "").trim().to_string())
}

/// Outcome of a roll-over attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rollover {
    /// The section had notes; holds the rewritten changelog
    Rolled(String),
    /// Nothing to release; the changelog should be left alone
    Empty,
}

/// Move the Unreleased notes under `## [version] - date` and reset Unreleased
pub fn roll_unreleased(
    content: &str,
    version: &Version,
    date: &str,
) -> Result<Rollover, ChangelogError> {
    let section = find_unreleased(content).ok_or(ChangelogError::MissingUnreleased)?;
    let notes = unreleased_notes(content)?;
    if notes.is_empty() {
        return Ok(Rollover::Empty);
    }

    let mut updated = String::with_capacity(content.len() + 64);
    updated.push_str(&content[..section.start]);
    updated.push_str(EMPTY_UNRELEASED);
    updated.push_str("\n\n");
    updated.push_str(&format!("## [{}] - {}\n\n", version, date));
    updated.push_str(&notes);
    updated.push('\n');

    let rest = &content[section.end..];
    if !rest.is_empty() {
        updated.push('\n');
        updated.push_str(rest);
    }

    Ok(Rollover::Rolled(updated))
}

/// Check that a rolled changelog has the release heading and a fresh Unreleased section
pub fn verify_rollover(content: &str, version: &Version) -> bool {
    content.contains(&format!("## [{}]", version)) && content.contains(EMPTY_UNRELEASED)
}
