// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for Bugrelay.
//!
//! Uses clap's derive API for declarative CLI parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Bugrelay - report application failures as tracked GitHub issues.
///
/// Resolves a failure title against the repository's issue history,
/// reopening fixed issues, pointing at open ones, refusing known
/// won't-fix problems, and creating labeled issues otherwise.
#[derive(Parser)]
#[command(name = "bugrelay", version, about)]
pub struct Cli {
    /// Target repository in owner/repo form (overrides the config file)
    #[arg(long, global = true)]
    pub repo: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Report a failure as a tracked issue
    Report {
        /// Issue title derived from the error signature
        title: String,

        /// Description used if a new issue is created
        #[arg(short, long)]
        description: Option<String>,

        /// Comment posted if a previously fixed issue is reopened
        #[arg(short = 'c', long)]
        reopen_comment: Option<String>,

        /// File containing traceback text to attach as a fenced block
        #[arg(long, value_name = "FILE")]
        traceback_file: Option<PathBuf>,
    },

    /// Manage tracker labels
    #[command(subcommand)]
    Labels(LabelsCommand),
}

/// Label management commands.
#[derive(Subcommand)]
pub enum LabelsCommand {
    /// Create any missing category labels (idempotent)
    Ensure,
}
