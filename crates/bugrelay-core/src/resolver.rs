// SPDX-License-Identifier: Apache-2.0

//! The issue-resolution decision engine.
//!
//! Given a title derived from an error signature, decides whether a matching
//! issue already exists in the tracker history, how that match should be
//! acted on, and which other issues are textually similar enough to surface
//! to a human. All functions here are pure over a fetched issue slice; the
//! orchestrator in [`crate::reporter`] owns the I/O.

use crate::issue::{IssueState, TrackedIssue};
use crate::labels;
use crate::similarity::partial_ratio;

/// Minimum similarity ratio for an issue to qualify as a suggestion.
pub const DEFAULT_MIN_RATIO: u8 = 60;

/// Maximum number of similar-issue suggestions returned.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// How a resolved match should be acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// No issue with this title exists; create a new one.
    New,
    /// A matching issue is already open; attach nothing, just point at it.
    AlreadyOpen,
    /// A matching issue was closed but is reopenable.
    Reopen,
    /// A matching issue is closed and marked invalid or won't-fix.
    Blocked,
}

/// Finds the issue whose title matches `title` exactly (case-insensitive).
///
/// Issues are scanned in tracker order. A non-duplicate match returns
/// immediately - the first such match wins. If only duplicate-labeled
/// matches exist, the scan continues and the *last* one seen is returned:
/// the canonical issue is always preferred over any duplicate alias, and
/// among aliases the most recently listed wins. This asymmetry is a
/// deliberate policy, not an accident of iteration.
#[must_use]
pub fn find_match<'a>(title: &str, issues: &'a [TrackedIssue]) -> Option<&'a TrackedIssue> {
    let title = title.to_lowercase();
    let mut duplicate_match = None;

    for issue in issues {
        if issue.title.to_lowercase() == title {
            if labels::is_duplicate(issue) {
                duplicate_match = Some(issue);
            } else {
                return Some(issue);
            }
        }
    }

    duplicate_match
}

/// Finds issues textually similar - but not identical - to `title`.
///
/// Excludes issues whose lowercased title equals the query, scores the rest
/// with [`partial_ratio`], keeps those scoring at least `min_ratio`, and
/// returns at most `max_suggestions` of them sorted ascending by score.
/// The ascending order (weakest qualifying match first) mirrors the
/// original reporting behavior and is preserved as-is; the sort is stable,
/// so equal scores keep tracker order.
#[must_use]
pub fn find_similar<'a>(
    title: &str,
    issues: &'a [TrackedIssue],
    min_ratio: u8,
    max_suggestions: usize,
) -> Vec<&'a TrackedIssue> {
    let title = title.to_lowercase();

    let mut candidates: Vec<(&TrackedIssue, u8)> = issues
        .iter()
        .filter(|issue| issue.title.to_lowercase() != title)
        .map(|issue| (issue, partial_ratio(&issue.title, &title)))
        .filter(|(_, ratio)| *ratio >= min_ratio)
        .collect();

    candidates.sort_by_key(|(_, ratio)| *ratio);
    candidates.truncate(max_suggestions);
    candidates.into_iter().map(|(issue, _)| issue).collect()
}

/// Classifies a resolved match into the action the orchestrator must take.
#[must_use]
pub fn classify(matched: Option<&TrackedIssue>) -> Disposition {
    match matched {
        None => Disposition::New,
        Some(issue) => match issue.state {
            IssueState::Open => Disposition::AlreadyOpen,
            IssueState::Closed if labels::is_valid(issue) => Disposition::Reopen,
            IssueState::Closed => Disposition::Blocked,
        },
    }
}
