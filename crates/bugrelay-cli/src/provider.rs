// SPDX-License-Identifier: Apache-2.0

//! CLI-specific `TokenProvider` implementation.
//!
//! Resolves the GitHub token from environment variables.

use bugrelay_core::auth::TokenProvider;
use secrecy::SecretString;
use tracing::debug;

/// CLI implementation of `TokenProvider`.
///
/// Resolves the GitHub token from the `GITHUB_TOKEN` environment variable,
/// falling back to `GH_TOKEN`.
pub struct CliTokenProvider;

impl TokenProvider for CliTokenProvider {
    fn github_token(&self) -> Option<SecretString> {
        for var in ["GITHUB_TOKEN", "GH_TOKEN"] {
            if let Ok(token) = std::env::var(var)
                && !token.is_empty()
            {
                debug!(var, "Resolved GitHub token from environment variable");
                return Some(SecretString::from(token));
            }
        }
        debug!("No GitHub token found in environment");
        None
    }
}
