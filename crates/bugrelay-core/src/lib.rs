// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Bugrelay Core
//!
//! Core library for Bugrelay - automatic exception-to-issue reporting.
//!
//! Converts an application failure (title, optional description, optional
//! traceback) into a tracked GitHub issue, deduplicating against the
//! repository's issue history and surfacing similar but distinct issues:
//! - a previously fixed issue with the same title is reopened,
//! - an already-open issue is pointed at without mutation,
//! - an issue marked invalid or won't-fix blocks the report,
//! - otherwise a new labeled issue is created.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bugrelay_core::{BugReporter, GitHubTracker, ReportRequest};
//! use secrecy::SecretString;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let token = SecretString::new("ghp_...".to_string().into());
//! let tracker = GitHubTracker::new("owner/repo", &token, 10)?;
//! let reporter = BugReporter::new(tracker);
//!
//! // Once per session, before the first report
//! reporter.ensure_labels_exist().await?;
//!
//! let summary = reporter
//!     .report(
//!         ReportRequest::builder()
//!             .title("ValueError: frobnication failed")
//!             .description("Raised while loading the mission file.")
//!             .build(),
//!     )
//!     .await?;
//! println!("{}", summary.render());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`resolver`] - the issue-resolution decision engine
//! - [`similarity`] - title similarity scoring
//! - [`labels`] - label taxonomy and classification
//! - [`reporter`] - report orchestration
//! - [`tracker`] - tracker capability interface
//! - [`github`] - GitHub transport
//! - [`config`] - configuration loading and paths

// ============================================================================
// Authentication
// ============================================================================

pub use auth::TokenProvider;

// ============================================================================
// Error Handling
// ============================================================================

pub use error::RelayError;

/// Convenience Result type for Bugrelay operations.
///
/// This is equivalent to `std::result::Result<T, RelayError>`.
pub type Result<T> = std::result::Result<T, RelayError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{AppConfig, GitHubConfig, ReportConfig, config_dir, config_file_path, load_config};

// ============================================================================
// Data Model
// ============================================================================

pub use issue::{IssueDigest, IssueState, TrackedIssue};
pub use labels::{DUPLICATE_LABELS, INVALID_LABELS, LabelSpec, NEW_REPORT_LABELS};

// ============================================================================
// Decision Engine
// ============================================================================

pub use resolver::{
    DEFAULT_MAX_SUGGESTIONS, DEFAULT_MIN_RATIO, Disposition, classify, find_match, find_similar,
};
pub use similarity::partial_ratio;

// ============================================================================
// Reporting
// ============================================================================

pub use reporter::{BugReporter, ReportOutcome, ReportRequest, ReportSummary};
pub use text::TextSource;

// ============================================================================
// Tracker Integration
// ============================================================================

pub use github::GitHubTracker;
pub use tracker::{CommentRef, IssueTracker, RemoteLabel};

// ============================================================================
// Retry Logic
// ============================================================================

pub use retry::{is_retryable_anyhow, is_retryable_http, retry_backoff};

// ============================================================================
// Modules
// ============================================================================

pub mod auth;
pub mod config;
pub mod error;
pub mod github;
pub mod issue;
pub mod labels;
pub mod reporter;
pub mod resolver;
pub mod retry;
pub mod similarity;
pub mod text;
pub mod tracker;
