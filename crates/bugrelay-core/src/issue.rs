// SPDX-License-Identifier: Apache-2.0

//! Issue data model.
//!
//! Issues are owned by the remote tracker. The core only reads them and
//! requests mutations; nothing is cached beyond a single resolution pass.

use serde::{Deserialize, Serialize};

use crate::labels;

/// Tracker-side state of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    /// The issue is open.
    Open,
    /// The issue is closed.
    Closed,
}

/// An issue as reported by the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedIssue {
    /// Issue number (1-based, assigned by the tracker).
    pub number: u64,
    /// Issue title.
    pub title: String,
    /// Issue body (markdown).
    #[serde(default)]
    pub body: String,
    /// Open or closed.
    pub state: IssueState,
    /// Titles of the labels attached to the issue.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Web URL of the issue.
    pub html_url: String,
}

impl TrackedIssue {
    /// Returns a compact view of the issue for logging and output.
    #[must_use]
    pub fn digest(&self) -> IssueDigest {
        IssueDigest {
            number: self.number,
            url: self.html_url.clone(),
            state: self.state,
            is_valid: labels::is_valid(self),
        }
    }
}

/// Compact issue view: number, URL, state, and whether it is reopenable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueDigest {
    /// Issue number.
    pub number: u64,
    /// Web URL of the issue.
    pub url: String,
    /// Open or closed.
    pub state: IssueState,
    /// False iff the issue carries an invalid/wontfix label.
    pub is_valid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_github_shaped_issue() {
        let raw = r#"{
            "number": 42,
            "title": "Segfault on startup",
            "body": "It crashes.",
            "state": "closed",
            "labels": ["bug", "wontfix"],
            "html_url": "https://github.com/owner/repo/issues/42"
        }"#;

        let issue: TrackedIssue = serde_json::from_str(raw).unwrap();
        assert_eq!(issue.number, 42);
        assert_eq!(issue.state, IssueState::Closed);
        assert_eq!(issue.labels, vec!["bug", "wontfix"]);
    }

    #[test]
    fn test_deserialize_defaults_for_missing_fields() {
        let raw = r#"{
            "number": 7,
            "title": "No body",
            "state": "open",
            "html_url": "https://github.com/owner/repo/issues/7"
        }"#;

        let issue: TrackedIssue = serde_json::from_str(raw).unwrap();
        assert!(issue.body.is_empty());
        assert!(issue.labels.is_empty());
    }

    #[test]
    fn test_digest_reflects_validity() {
        let raw = r#"{
            "number": 3,
            "title": "Known problem",
            "state": "closed",
            "labels": ["invalid"],
            "html_url": "https://github.com/owner/repo/issues/3"
        }"#;

        let issue: TrackedIssue = serde_json::from_str(raw).unwrap();
        let digest = issue.digest();
        assert_eq!(digest.number, 3);
        assert_eq!(digest.state, IssueState::Closed);
        assert!(!digest.is_valid);
    }
}
