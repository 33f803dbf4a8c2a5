// SPDX-License-Identifier: Apache-2.0

//! Token provider abstraction for credential resolution.
//!
//! This module defines the `TokenProvider` trait, which abstracts GitHub
//! credential resolution away from the transport. The CLI resolves tokens
//! from environment variables; embedders can supply their own source.

use secrecy::SecretString;

/// Provides the GitHub credential for API calls.
///
/// Implementations should handle credential lookup and return `None` if
/// no credential is available.
pub trait TokenProvider: Send + Sync {
    /// Retrieves the GitHub API token.
    ///
    /// Returns `None` if no token is available from any source.
    fn github_token(&self) -> Option<SecretString>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock implementation for testing.
    struct MockTokenProvider {
        github_token: Option<SecretString>,
    }

    impl TokenProvider for MockTokenProvider {
        fn github_token(&self) -> Option<SecretString> {
            self.github_token.clone()
        }
    }

    #[test]
    fn test_mock_provider_with_token() {
        let provider = MockTokenProvider {
            github_token: Some(SecretString::new("gh_token".to_string().into())),
        };
        assert!(provider.github_token().is_some());
    }

    #[test]
    fn test_mock_provider_without_token() {
        let provider = MockTokenProvider { github_token: None };
        assert!(provider.github_token().is_none());
    }
}
