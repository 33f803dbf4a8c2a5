// SPDX-License-Identifier: Apache-2.0

//! Label taxonomy and classification.
//!
//! The three label categories are closed enumerations with fixed colors,
//! not an open taxonomy. Category titles never overlap. Classification of
//! an issue is a pure function of its label set; no network access.

use crate::issue::TrackedIssue;

/// A label definition: title plus RGB hex color (no `#` prefix).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSpec {
    /// Label title as it appears in the tracker.
    pub title: &'static str,
    /// Six-digit RGB hex color.
    pub color: &'static str,
}

/// Labels marking an issue as a known duplicate of another.
pub const DUPLICATE_LABELS: &[LabelSpec] = &[LabelSpec {
    title: "duplicate",
    color: "cccccc",
}];

/// Labels marking an issue as invalid or "will not fix".
pub const INVALID_LABELS: &[LabelSpec] = &[
    LabelSpec {
        title: "invalid",
        color: "e6e6e6",
    },
    LabelSpec {
        title: "wontfix",
        color: "ffffff",
    },
];

/// Labels applied to freshly auto-created issues.
pub const NEW_REPORT_LABELS: &[LabelSpec] = &[
    LabelSpec {
        title: "bug",
        color: "e11d21",
    },
    LabelSpec {
        title: "auto-report",
        color: "fbca04",
    },
];

/// Iterates every label across the three categories.
pub fn all_labels() -> impl Iterator<Item = &'static LabelSpec> {
    DUPLICATE_LABELS
        .iter()
        .chain(INVALID_LABELS)
        .chain(NEW_REPORT_LABELS)
}

/// Returns the titles of a label category as owned strings.
#[must_use]
pub fn category_titles(category: &[LabelSpec]) -> Vec<String> {
    category.iter().map(|l| l.title.to_string()).collect()
}

/// Returns true iff the issue's label set intersects the category's titles.
#[must_use]
pub fn has_label(issue: &TrackedIssue, category: &[LabelSpec]) -> bool {
    issue
        .labels
        .iter()
        .any(|title| category.iter().any(|spec| spec.title == title))
}

/// Returns true iff the issue is marked as a duplicate of another issue.
#[must_use]
pub fn is_duplicate(issue: &TrackedIssue) -> bool {
    has_label(issue, DUPLICATE_LABELS)
}

/// Returns true iff the issue is reopenable - i.e. not marked invalid or
/// "will not fix".
#[must_use]
pub fn is_valid(issue: &TrackedIssue) -> bool {
    !has_label(issue, INVALID_LABELS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::{IssueState, TrackedIssue};

    fn issue_with_labels(labels: &[&str]) -> TrackedIssue {
        TrackedIssue {
            number: 1,
            title: "Err X".to_string(),
            body: String::new(),
            state: IssueState::Open,
            labels: labels.iter().map(ToString::to_string).collect(),
            html_url: "https://github.com/owner/repo/issues/1".to_string(),
        }
    }

    #[test]
    fn test_category_titles_never_overlap() {
        let mut seen = std::collections::HashSet::new();
        for label in all_labels() {
            assert!(seen.insert(label.title), "duplicate title: {}", label.title);
        }
    }

    #[test]
    fn test_has_label_intersection() {
        let issue = issue_with_labels(&["bug", "wontfix"]);
        assert!(has_label(&issue, INVALID_LABELS));
        assert!(has_label(&issue, NEW_REPORT_LABELS));
        assert!(!has_label(&issue, DUPLICATE_LABELS));
    }

    #[test]
    fn test_is_duplicate() {
        assert!(is_duplicate(&issue_with_labels(&["duplicate"])));
        assert!(!is_duplicate(&issue_with_labels(&["bug"])));
        assert!(!is_duplicate(&issue_with_labels(&[])));
    }

    #[test]
    fn test_is_valid_without_invalid_labels() {
        assert!(is_valid(&issue_with_labels(&[])));
        assert!(is_valid(&issue_with_labels(&["bug", "auto-report"])));
    }

    #[test]
    fn test_is_valid_with_invalid_labels() {
        assert!(!is_valid(&issue_with_labels(&["invalid"])));
        assert!(!is_valid(&issue_with_labels(&["wontfix"])));
    }

    #[test]
    fn test_unrelated_label_never_changes_classification() {
        let base = issue_with_labels(&["wontfix"]);
        let extended = issue_with_labels(&["wontfix", "needs-info"]);
        assert_eq!(is_valid(&base), is_valid(&extended));
        assert_eq!(is_duplicate(&base), is_duplicate(&extended));
    }

    #[test]
    fn test_category_titles_owned() {
        assert_eq!(
            category_titles(NEW_REPORT_LABELS),
            vec!["bug".to_string(), "auto-report".to_string()]
        );
    }
}
