// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `RelayError` and adds hints for the error
//! types a user can act on, keeping structured error data in the library
//! and presentation here.

use anyhow::Error;
use bugrelay_core::error::RelayError;

/// Formats an error for CLI display with helpful hints.
///
/// If the error is not a `RelayError`, returns the original error message.
pub fn format_error(error: &Error) -> String {
    if let Some(relay_err) = error.downcast_ref::<RelayError>() {
        match relay_err {
            RelayError::NotAuthenticated => format!(
                "{relay_err}\n\nTip: Create a fine-grained token with issue read/write access\n\
                 at https://github.com/settings/tokens and export it as GITHUB_TOKEN."
            ),
            RelayError::NoRepository => format!(
                "{relay_err}\n\nTip: Either pass --repo owner/repo or set github.repo at {}",
                bugrelay_core::config_file_path().display()
            ),
            RelayError::Config { .. } => format!(
                "{relay_err}\n\nTip: Check your config file at {}",
                bugrelay_core::config_file_path().display()
            ),
            RelayError::GitHub { .. } => relay_err.to_string(),
        }
    } else {
        format!("{error:#}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_not_authenticated_adds_hint() {
        let err = anyhow::anyhow!(RelayError::NotAuthenticated);
        let formatted = format_error(&err);
        assert!(formatted.contains("GITHUB_TOKEN"));
        assert!(formatted.contains("Tip:"));
    }

    #[test]
    fn test_format_plain_anyhow_error() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(format_error(&err), "something else");
    }
}
