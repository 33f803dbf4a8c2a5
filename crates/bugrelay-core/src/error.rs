// SPDX-License-Identifier: Apache-2.0

//! Error types for Bugrelay.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur during Bugrelay operations.
#[derive(Error, Debug)]
pub enum RelayError {
    /// GitHub API error from octocrab.
    #[error("GitHub API error: {message}")]
    GitHub {
        /// Error message.
        message: String,
    },

    /// No GitHub token available - set `GITHUB_TOKEN` first.
    #[error("Authentication required - set the GITHUB_TOKEN environment variable")]
    NotAuthenticated,

    /// Configuration file error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// Target repository is missing from configuration and CLI arguments.
    #[error("No target repository - pass --repo or set github.repo in the config file")]
    NoRepository,
}

impl From<octocrab::Error> for RelayError {
    fn from(err: octocrab::Error) -> Self {
        RelayError::GitHub {
            message: err.to_string(),
        }
    }
}

impl From<config::ConfigError> for RelayError {
    fn from(err: config::ConfigError) -> Self {
        RelayError::Config {
            message: err.to_string(),
        }
    }
}
