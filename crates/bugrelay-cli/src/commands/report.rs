// SPDX-License-Identifier: Apache-2.0

//! The `report` command: resolve a failure title and mutate the tracker.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bugrelay_core::{BugReporter, IssueTracker, ReportRequest, TextSource};
use console::style;
use tracing::debug;

/// Reports a failure, ensuring category labels exist first.
pub async fn run<T: IssueTracker>(
    reporter: &BugReporter<T>,
    title: String,
    description: Option<String>,
    reopen_comment: Option<String>,
    traceback_file: Option<PathBuf>,
) -> Result<()> {
    let traceback = match traceback_file {
        Some(path) => Some(
            std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read traceback file {}", path.display()))?,
        ),
        None => None,
    };

    reporter.ensure_labels_exist().await?;
    debug!("Label taxonomy provisioned");

    let request = ReportRequest::builder()
        .title(title)
        .maybe_description(description.map(TextSource::from))
        .maybe_reopen_comment(reopen_comment.map(TextSource::from))
        .maybe_traceback(traceback)
        .build();

    let summary = reporter.report(request).await?;

    print!("{}", summary.render());
    if !summary.similar.is_empty() {
        eprintln!(
            "{}",
            style("Review the similar issues above before following up.").dim()
        );
    }

    Ok(())
}
