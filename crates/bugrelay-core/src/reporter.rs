// SPDX-License-Identifier: Apache-2.0

//! The report orchestrator.
//!
//! Composes the decision engine with the tracker capability interface:
//! resolves a title against the full issue history, performs at most one
//! create/reopen/comment mutation, and independently collects similar-issue
//! suggestions for the summary. Label provisioning runs separately, once per
//! session, before the first report.

use std::collections::HashSet;
use std::fmt::Write;

use anyhow::Result;
use bon::Builder;
use tracing::{debug, instrument};

use crate::issue::TrackedIssue;
use crate::labels;
use crate::resolver::{
    DEFAULT_MAX_SUGGESTIONS, DEFAULT_MIN_RATIO, Disposition, classify, find_match, find_similar,
};
use crate::text::{TextSource, compose_body};
use crate::tracker::IssueTracker;

/// A single report: a title derived from an error signature plus optional
/// description, reopen comment, and traceback text.
#[derive(Debug, Builder)]
pub struct ReportRequest {
    /// Issue title. Matching against tracker history is case-insensitive.
    #[builder(into)]
    pub title: String,
    /// Description for a newly created issue. May be deferred; a failing
    /// producer is rendered into an inline note, never propagated.
    #[builder(into)]
    pub description: Option<TextSource>,
    /// Comment posted when a previously fixed issue is reopened. Same
    /// deferral and failure-trapping rules as the description.
    #[builder(into)]
    pub reopen_comment: Option<TextSource>,
    /// Traceback text, rendered as a fenced block in bodies and comments.
    #[builder(into)]
    pub traceback: Option<String>,
}

/// What the report did, per branch of the decision engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// No issue with this title existed; a new one was created.
    Created {
        /// The freshly created issue.
        issue: TrackedIssue,
    },
    /// A previously fixed issue was reopened.
    Reopened {
        /// The reopened issue.
        issue: TrackedIssue,
        /// URL of the posted follow-up comment, if one was supplied.
        comment_url: Option<String>,
    },
    /// A matching issue is already open; nothing was mutated.
    AlreadyOpen {
        /// The existing open issue.
        issue: TrackedIssue,
    },
    /// A matching issue is marked invalid or won't-fix; nothing was mutated.
    WontFix {
        /// The blocked issue.
        issue: TrackedIssue,
    },
}

impl ReportOutcome {
    /// The issue this outcome refers to.
    #[must_use]
    pub fn issue(&self) -> &TrackedIssue {
        match self {
            ReportOutcome::Created { issue }
            | ReportOutcome::Reopened { issue, .. }
            | ReportOutcome::AlreadyOpen { issue }
            | ReportOutcome::WontFix { issue } => issue,
        }
    }
}

/// Result of a report: the action taken plus similar-issue suggestions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    /// The action taken.
    pub outcome: ReportOutcome,
    /// Similar but non-identical issues, weakest qualifying match first.
    pub similar: Vec<TrackedIssue>,
}

impl ReportSummary {
    /// Renders the human-readable outcome summary.
    ///
    /// The similar-issue list is appended regardless of which branch fired.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();

        match &self.outcome {
            ReportOutcome::Created { issue } => {
                let _ = writeln!(out, "Created new issue: {}", issue.html_url);
            }
            ReportOutcome::Reopened { issue, comment_url } => {
                let _ = writeln!(out, "Reopened issue: {}", issue.html_url);
                if let Some(url) = comment_url {
                    let _ = writeln!(out, "Follow-up comment: {url}");
                }
            }
            ReportOutcome::AlreadyOpen { issue } => {
                let _ = writeln!(out, "Issue already open: {}", issue.html_url);
            }
            ReportOutcome::WontFix { issue } => {
                let _ = writeln!(
                    out,
                    "This problem is known but will not be fixed: {}",
                    issue.html_url
                );
            }
        }

        if !self.similar.is_empty() {
            let _ = writeln!(out, "Similar issues:");
            for issue in &self.similar {
                let _ = writeln!(out, "- {}: {}", issue.title, issue.html_url);
            }
        }

        out
    }
}

/// Reports failures to an issue tracker, deduplicating against its history.
pub struct BugReporter<T: IssueTracker> {
    tracker: T,
    min_ratio: u8,
    max_suggestions: usize,
}

impl<T: IssueTracker> BugReporter<T> {
    /// Creates a reporter with the default suggestion limits.
    pub fn new(tracker: T) -> Self {
        Self {
            tracker,
            min_ratio: DEFAULT_MIN_RATIO,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }

    /// Overrides the similarity threshold and suggestion cap.
    #[must_use]
    pub fn with_suggestion_limits(mut self, min_ratio: u8, max_suggestions: usize) -> Self {
        self.min_ratio = min_ratio;
        self.max_suggestions = max_suggestions;
        self
    }

    /// The underlying tracker.
    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    /// Ensures all category labels exist in the tracker.
    ///
    /// Pre-lists existing labels and creates only the missing ones, so the
    /// call is idempotent. Must complete before the first report of a
    /// session; concurrent calls are safe but wasteful.
    #[instrument(skip(self))]
    pub async fn ensure_labels_exist(&self) -> Result<()> {
        let existing = self.tracker.list_labels().await?;
        let existing_titles: HashSet<&str> = existing.iter().map(|l| l.title.as_str()).collect();

        for label in labels::all_labels() {
            if !existing_titles.contains(label.title) {
                self.tracker.create_label(label.title, label.color).await?;
                debug!(title = label.title, "Created missing label");
            }
        }

        Ok(())
    }

    /// Resolves `request.title` against the tracker history and performs at
    /// most one create/reopen/comment mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if any tracker call fails; no summary is fabricated
    /// for a partially failed report.
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn report(&self, request: ReportRequest) -> Result<ReportSummary> {
        let ReportRequest {
            title,
            description,
            reopen_comment,
            traceback,
        } = request;

        let issues = self.tracker.list_issues().await?;
        let matched = find_match(&title, &issues).cloned();

        let outcome = match matched {
            None => {
                let rendered = description.and_then(|d| d.render("issue description"));
                let body = compose_body(rendered.as_deref(), traceback.as_deref());
                let issue = self
                    .tracker
                    .create_issue(&title, &body, &labels::category_titles(labels::NEW_REPORT_LABELS))
                    .await?;
                debug!(number = issue.number, "Created new issue");
                ReportOutcome::Created { issue }
            }
            Some(issue) => match classify(Some(&issue)) {
                // classify(Some(_)) never yields New
                Disposition::AlreadyOpen | Disposition::New => {
                    debug!(number = issue.number, "Issue already open");
                    ReportOutcome::AlreadyOpen { issue }
                }
                Disposition::Reopen => {
                    self.tracker.reopen_issue(issue.number).await?;
                    debug!(number = issue.number, "Reopened issue");

                    let comment_url =
                        match reopen_comment.and_then(|c| c.render("reopen comment")) {
                            Some(text) => {
                                let body = compose_body(Some(&text), traceback.as_deref());
                                let comment =
                                    self.tracker.post_comment(issue.number, &body).await?;
                                Some(comment.html_url)
                            }
                            None => None,
                        };

                    ReportOutcome::Reopened { issue, comment_url }
                }
                Disposition::Blocked => {
                    debug!(number = issue.number, "Issue is marked as won't fix");
                    ReportOutcome::WontFix { issue }
                }
            },
        };

        // Suggestions are computed over the same fetched history; the
        // exact-title exclusion in find_similar drops the matched issue.
        let similar = find_similar(&title, &issues, self.min_ratio, self.max_suggestions)
            .into_iter()
            .cloned()
            .collect();

        Ok(ReportSummary { outcome, similar })
    }
}
