// SPDX-License-Identifier: Apache-2.0

//! GitHub transport for the tracker capability interface.
//!
//! Implements [`IssueTracker`] over octocrab with a personal token.
//! Reads are retried with exponential backoff; mutations are issued exactly
//! once, so a transport failure can never create two issues for one report.

use anyhow::{Context, Result};
use async_trait::async_trait;
use backon::Retryable;
use octocrab::models::IssueState as GitHubIssueState;
use octocrab::{Octocrab, params};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};

use crate::issue::{IssueState, TrackedIssue};
use crate::retry::{is_retryable_anyhow, retry_backoff};
use crate::tracker::{CommentRef, IssueTracker, RemoteLabel};

/// Parses an owner/repo string to extract owner and repo.
///
/// Validates format: exactly one `/`, non-empty parts.
///
/// # Errors
///
/// Returns an error if the format is invalid.
pub fn parse_owner_repo(s: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = s.split('/').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        anyhow::bail!(
            "Invalid owner/repo format.\n\
             Expected: owner/repo\n\
             Got: {s}"
        );
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}

/// GitHub-backed issue tracker.
pub struct GitHubTracker {
    client: Octocrab,
    owner: String,
    repo: String,
}

impl GitHubTracker {
    /// Creates a tracker for `owner/repo` authenticated with a personal token.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository reference is malformed or the
    /// client cannot be built.
    pub fn new(owner_repo: &str, token: &SecretString, timeout_seconds: u64) -> Result<Self> {
        let (owner, repo) = parse_owner_repo(owner_repo)?;

        let timeout = std::time::Duration::from_secs(timeout_seconds);
        let client = Octocrab::builder()
            .personal_token(token.expose_secret().to_string())
            .set_connect_timeout(Some(timeout))
            .set_read_timeout(Some(timeout))
            .build()
            .context("Failed to build GitHub client")?;

        Ok(Self {
            client,
            owner,
            repo,
        })
    }

    fn issues(&self) -> octocrab::issues::IssueHandler<'_> {
        self.client.issues(&self.owner, &self.repo)
    }
}

fn convert_issue(issue: octocrab::models::issues::Issue) -> TrackedIssue {
    let state = match issue.state {
        GitHubIssueState::Closed => IssueState::Closed,
        _ => IssueState::Open,
    };

    TrackedIssue {
        number: issue.number,
        title: issue.title,
        body: issue.body.unwrap_or_default(),
        state,
        labels: issue.labels.into_iter().map(|l| l.name).collect(),
        html_url: issue.html_url.to_string(),
    }
}

#[async_trait]
impl IssueTracker for GitHubTracker {
    #[instrument(skip(self), fields(owner = %self.owner, repo = %self.repo))]
    async fn list_labels(&self) -> Result<Vec<RemoteLabel>> {
        debug!("Listing repository labels");

        let page = (|| async {
            self.issues()
                .list_labels_for_repo()
                .per_page(100)
                .send()
                .await
                .map_err(|e| anyhow::anyhow!(e))
        })
        .retry(retry_backoff())
        .when(is_retryable_anyhow)
        .notify(|err, dur| {
            tracing::warn!(error = %err, retry_after = ?dur, "Retrying list_labels");
        })
        .await
        .with_context(|| format!("Failed to list labels for {}/{}", self.owner, self.repo))?;

        let labels = self
            .client
            .all_pages(page)
            .await
            .context("Failed to page through labels")?;

        Ok(labels
            .into_iter()
            .map(|l| RemoteLabel {
                title: l.name,
                color: l.color,
            })
            .collect())
    }

    #[instrument(skip(self), fields(owner = %self.owner, repo = %self.repo, title = %title))]
    async fn create_label(&self, title: &str, color: &str) -> Result<()> {
        debug!("Creating label");

        self.issues()
            .create_label(title, color, "")
            .await
            .with_context(|| format!("Failed to create label '{title}'"))?;

        Ok(())
    }

    #[instrument(skip(self), fields(owner = %self.owner, repo = %self.repo))]
    async fn list_issues(&self) -> Result<Vec<TrackedIssue>> {
        debug!("Fetching full issue history");

        let page = (|| async {
            self.issues()
                .list()
                .state(params::State::All)
                .per_page(100)
                .send()
                .await
                .map_err(|e| anyhow::anyhow!(e))
        })
        .retry(retry_backoff())
        .when(is_retryable_anyhow)
        .notify(|err, dur| {
            tracing::warn!(error = %err, retry_after = ?dur, "Retrying list_issues");
        })
        .await
        .with_context(|| format!("Failed to list issues for {}/{}", self.owner, self.repo))?;

        let items = self
            .client
            .all_pages(page)
            .await
            .context("Failed to page through issues")?;

        // The issues endpoint also returns pull requests; drop them.
        let issues: Vec<TrackedIssue> = items
            .into_iter()
            .filter(|issue| issue.pull_request.is_none())
            .map(convert_issue)
            .collect();

        debug!(count = issues.len(), "Fetched issue history");

        Ok(issues)
    }

    #[instrument(skip(self, body), fields(owner = %self.owner, repo = %self.repo, title = %title))]
    async fn create_issue(
        &self,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> Result<TrackedIssue> {
        debug!("Creating GitHub issue");

        let issue = self
            .issues()
            .create(title)
            .body(body)
            .labels(labels.to_vec())
            .send()
            .await
            .with_context(|| format!("Failed to create issue in {}/{}", self.owner, self.repo))?;

        debug!(number = issue.number, url = %issue.html_url, "Issue created");

        Ok(convert_issue(issue))
    }

    #[instrument(skip(self), fields(owner = %self.owner, repo = %self.repo, number = number))]
    async fn reopen_issue(&self, number: u64) -> Result<()> {
        debug!("Reopening issue");

        self.issues()
            .update(number)
            .state(GitHubIssueState::Open)
            .send()
            .await
            .with_context(|| format!("Failed to reopen issue #{number}"))?;

        Ok(())
    }

    #[instrument(skip(self, body), fields(owner = %self.owner, repo = %self.repo, number = number))]
    async fn post_comment(&self, number: u64, body: &str) -> Result<CommentRef> {
        debug!("Posting comment");

        let comment = self
            .issues()
            .create_comment(number, body)
            .await
            .with_context(|| format!("Failed to post comment to issue #{number}"))?;

        let html_url = comment.html_url.to_string();
        debug!(url = %html_url, "Comment posted");

        Ok(CommentRef { html_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_owner_repo_valid() {
        let (owner, repo) = parse_owner_repo("octocat/Hello-World").unwrap();
        assert_eq!(owner, "octocat");
        assert_eq!(repo, "Hello-World");
    }

    #[test]
    fn test_parse_owner_repo_invalid_no_slash() {
        assert!(parse_owner_repo("octocat").is_err());
    }

    #[test]
    fn test_parse_owner_repo_invalid_empty_owner() {
        assert!(parse_owner_repo("/repo").is_err());
    }

    #[test]
    fn test_parse_owner_repo_invalid_empty_repo() {
        assert!(parse_owner_repo("owner/").is_err());
    }

    #[test]
    fn test_parse_owner_repo_extra_separator() {
        assert!(parse_owner_repo("a/b/c").is_err());
    }
}
