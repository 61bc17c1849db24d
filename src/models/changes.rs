//! Classification of files changed since the previous release

/// Per-category counts of changed files
///
/// Categories overlap: `docs/CHANGELOG.md` is a doc file once, but
/// `.github/CHANGELOG.md` counts as both doc and config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSummary {
    pub source: usize,
    pub docs: usize,
    pub tests: usize,
    pub config: usize,
    pub scripts: usize,
}

impl ChangeSummary {
    pub fn from_paths<S: AsRef<str>>(paths: &[S]) -> Self {
        let mut summary = Self::default();
        for path in paths.iter().map(AsRef::as_ref) {
            if path.starts_with("src/") {
                summary.source += 1;
            }
            if path.starts_with("docs/") || path.contains("README") || path.contains("CHANGELOG") {
                summary.docs += 1;
            }
            if path.starts_with("test/") {
                summary.tests += 1;
            }
            if path == "package.json" || path.starts_with('.') {
                summary.config += 1;
            }
            if path.starts_with("scripts/") {
                summary.scripts += 1;
            }
        }
        summary
    }

    /// Human readable notes, e.g. "2 source files modified, 1 doc file updated"
    pub fn notes(&self) -> String {
        let parts: Vec<String> = [
            (self.source, "source", "modified"),
            (self.docs, "doc", "updated"),
            (self.tests, "test", "modified"),
            (self.config, "config", "changed"),
            (self.scripts, "script", "modified"),
        ]
        .into_iter()
        .filter(|(count, _, _)| *count > 0)
        .map(|(count, kind, verb)| format!("{} {} {} {}", count, kind, plural(count, "file"), verb))
        .collect();

        if parts.is_empty() {
            VERSION_BUMP_ONLY.to_string()
        } else {
            parts.join(", ")
        }
    }
}

pub const VERSION_BUMP_ONLY: &str = "Version bump only";

/// `1 file`, `2 files`
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{}s", noun)
    }
}
