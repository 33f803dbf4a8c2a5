// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the Bugrelay CLI.

pub mod labels;
pub mod report;

use anyhow::Result;
use bugrelay_core::auth::TokenProvider;
use bugrelay_core::{AppConfig, BugReporter, GitHubTracker, RelayError};

use crate::cli::{Commands, LabelsCommand};
use crate::provider::CliTokenProvider;

/// Builds a reporter against the resolved target repository.
///
/// The `--repo` flag wins over the config file. Fails with
/// `RelayError::NoRepository` when neither is set and
/// `RelayError::NotAuthenticated` when no token is available.
fn build_reporter(
    repo_flag: Option<&str>,
    config: &AppConfig,
) -> Result<BugReporter<GitHubTracker>> {
    let repo = repo_flag
        .or(config.github.repo.as_deref())
        .ok_or(RelayError::NoRepository)?;

    let token = CliTokenProvider
        .github_token()
        .ok_or(RelayError::NotAuthenticated)?;

    let tracker = GitHubTracker::new(repo, &token, config.github.api_timeout_seconds)?;
    Ok(BugReporter::new(tracker)
        .with_suggestion_limits(config.report.min_ratio, config.report.max_suggestions))
}

/// Dispatch to the appropriate command handler.
pub async fn run(command: Commands, repo_flag: Option<&str>, config: &AppConfig) -> Result<()> {
    let reporter = build_reporter(repo_flag, config)?;

    match command {
        Commands::Report {
            title,
            description,
            reopen_comment,
            traceback_file,
        } => report::run(&reporter, title, description, reopen_comment, traceback_file).await,

        Commands::Labels(LabelsCommand::Ensure) => labels::run(&reporter).await,
    }
}
