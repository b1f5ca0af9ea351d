//! Text construction for `env.d.ts`.
//!
//! Merging is additive only: existing content is never rewritten, reordered,
//! or removed. Missing reference lines are collected in registration order and
//! placed as one block above the existing content.

use crate::paths::baseline_line;
use std::collections::HashSet;

/// Result of merging expected references into existing content
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub content: String,
    /// Lines that were not present before, in the order they were inserted
    pub added: Vec<String>,
}

impl MergeOutcome {
    pub fn changed(&self) -> bool {
        !self.added.is_empty()
    }
}

/// Insert every expected line that does not already occur in `existing`.
///
/// Presence is a verbatim substring test, so a reference that a user moved
/// elsewhere in the file still counts as present.
pub fn merge_references(existing: &str, expected: &[String]) -> MergeOutcome {
    let added = missing_lines(expected, |line| existing.contains(line));

    if added.is_empty() {
        return MergeOutcome {
            content: existing.to_string(),
            added,
        };
    }

    let mut lines: Vec<&str> = added.iter().map(String::as_str).collect();
    lines.push(existing);

    MergeOutcome {
        content: lines.join("\n"),
        added,
    }
}

/// Build the content of a freshly created `env.d.ts`.
///
/// `added` holds the reference lines written after the baseline line.
pub fn build_fresh(client_types: &str, expected: &[String]) -> MergeOutcome {
    let baseline = baseline_line(client_types);
    let added = missing_lines(expected, |line| line == baseline);

    let content = std::iter::once(baseline.as_str())
        .chain(added.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join("\n");

    MergeOutcome { content, added }
}

/// Expected lines not already present, deduplicated, in their original order
fn missing_lines(expected: &[String], is_present: impl Fn(&str) -> bool) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();

    expected
        .iter()
        .filter(|line| !is_present(line.as_str()))
        .filter(|line| seen.insert(line.as_str()))
        .cloned()
        .collect()
}
