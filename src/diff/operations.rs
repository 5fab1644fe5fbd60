use similar::{ChangeTag, TextDiff};
use tracing::debug;

/// Number of unchanged lines shown around each hunk
const CONTEXT_LINES: usize = 3;

/// Line counts of a diff between two versions of a file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub inserted: usize,
    pub deleted: usize,
}

impl DiffStats {
    pub fn is_empty(&self) -> bool {
        self.inserted == 0 && self.deleted == 0
    }
}

/// Count inserted and deleted lines between two strings
pub fn diff_stats(old: &str, new: &str) -> DiffStats {
    let diff = TextDiff::from_lines(old, new);
    let mut stats = DiffStats::default();

    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Delete => stats.deleted += 1,
            ChangeTag::Insert => stats.inserted += 1,
            ChangeTag::Equal => {}
        }
    }

    debug!("Diff stats: +{} -{}", stats.inserted, stats.deleted);
    stats
}

/// Render a unified diff of `old` against `new`, labelled with `name`.
///
/// Returns an empty string when both sides are identical.
pub fn unified_diff(name: &str, old: &str, new: &str) -> String {
    if old == new {
        return String::new();
    }

    let diff = TextDiff::from_lines(old, new);
    diff.unified_diff()
        .context_radius(CONTEXT_LINES)
        .header(&format!("a/{}", name), &format!("b/{}", name))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_inputs() {
        let text = "def f():\n    return 1\n";
        assert_eq!(unified_diff("f.py", text, text), "");
        assert!(diff_stats(text, text).is_empty());
    }

    #[test]
    fn test_single_line_change() {
        let old = "a\nb\nc\n";
        let new = "a\nB\nc\n";

        let stats = diff_stats(old, new);
        assert_eq!(stats, DiffStats { inserted: 1, deleted: 1 });

        let rendered = unified_diff("x.py", old, new);
        assert!(rendered.starts_with("--- a/x.py\n+++ b/x.py\n"));
        assert!(rendered.contains("-b\n"));
        assert!(rendered.contains("+B\n"));
    }
}
