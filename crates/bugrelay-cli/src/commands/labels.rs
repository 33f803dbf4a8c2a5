// SPDX-License-Identifier: Apache-2.0

//! The `labels ensure` command: provision the category label taxonomy.

use anyhow::Result;
use bugrelay_core::{BugReporter, IssueTracker};
use console::style;

/// Creates any category labels missing from the repository.
///
/// Safe to run repeatedly; existing labels are left untouched.
pub async fn run<T: IssueTracker>(reporter: &BugReporter<T>) -> Result<()> {
    reporter.ensure_labels_exist().await?;
    println!("{} All category labels are present.", style("✓").green());
    Ok(())
}
