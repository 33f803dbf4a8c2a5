// SPDX-License-Identifier: Apache-2.0

//! Tracker capability interface.
//!
//! The decision engine consumes the remote issue tracker through this trait
//! only; [`crate::github`] provides the production implementation and tests
//! substitute an in-process mock. Errors are opaque transport failures - the
//! core never interprets tracker-specific error codes.

use anyhow::Result;
use async_trait::async_trait;

use crate::issue::TrackedIssue;

/// A label as reported by the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteLabel {
    /// Label title.
    pub title: String,
    /// RGB hex color (no `#` prefix).
    pub color: String,
}

/// A reference to a posted comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRef {
    /// Web URL of the comment.
    pub html_url: String,
}

/// Capability interface to the remote issue tracker.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Lists all labels defined in the tracker.
    async fn list_labels(&self) -> Result<Vec<RemoteLabel>>;

    /// Creates a label with the given title and color.
    async fn create_label(&self, title: &str, color: &str) -> Result<()>;

    /// Lists the full issue history (open and closed).
    async fn list_issues(&self) -> Result<Vec<TrackedIssue>>;

    /// Creates a new issue with the given labels attached.
    async fn create_issue(
        &self,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> Result<TrackedIssue>;

    /// Patches the state of an existing issue back to open.
    async fn reopen_issue(&self, number: u64) -> Result<()>;

    /// Posts a comment on an existing issue.
    async fn post_comment(&self, number: u64, body: &str) -> Result<CommentRef>;
}
