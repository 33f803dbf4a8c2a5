// SPDX-License-Identifier: Apache-2.0

//! Retry logic with exponential backoff for transient failures.
//!
//! Provides helpers to detect retryable tracker errors and configure
//! exponential backoff with jitter for the GitHub transport.

use backon::ExponentialBuilder;

/// Determines if an HTTP status code is retryable.
///
/// Retryable status codes are:
/// - 429 (Too Many Requests / Rate Limited)
/// - 500 (Internal Server Error)
/// - 502 (Bad Gateway)
/// - 503 (Service Unavailable)
/// - 504 (Gateway Timeout)
#[must_use]
pub fn is_retryable_http(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Determines if an octocrab error is retryable.
///
/// Retryable octocrab errors include:
/// - GitHub API errors with retryable status codes (429, 500, 502, 503, 504, 403)
/// - Service errors (transient)
/// - Hyper errors (network-related)
#[must_use]
pub fn is_retryable_octocrab(e: &octocrab::Error) -> bool {
    match e {
        octocrab::Error::GitHub { source, .. } => {
            // 403 is included for GitHub secondary rate limits
            matches!(
                source.status_code.as_u16(),
                429 | 500 | 502 | 503 | 504 | 403
            )
        }
        octocrab::Error::Service { .. } | octocrab::Error::Hyper { .. } => true,
        _ => false,
    }
}

/// Determines if an anyhow error is retryable.
///
/// Checks if the error chain contains a retryable octocrab error.
#[must_use]
pub fn is_retryable_anyhow(e: &anyhow::Error) -> bool {
    if let Some(oct_err) = e.downcast_ref::<octocrab::Error>() {
        return is_retryable_octocrab(oct_err);
    }
    false
}

/// Creates a configured exponential backoff builder for retries.
///
/// - Factor: 2 (exponential growth)
/// - Min delay: 1 second
/// - Max times: 3 (total of 3 attempts)
/// - Jitter: enabled
#[must_use]
pub fn retry_backoff() -> ExponentialBuilder {
    ExponentialBuilder::default()
        .with_factor(2.0)
        .with_min_delay(std::time::Duration::from_secs(1))
        .with_max_times(3)
        .with_jitter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_retryable_http_retryable_codes() {
        assert!(is_retryable_http(429));
        assert!(is_retryable_http(500));
        assert!(is_retryable_http(502));
        assert!(is_retryable_http(503));
        assert!(is_retryable_http(504));
    }

    #[test]
    fn test_is_retryable_http_non_retryable_codes() {
        assert!(!is_retryable_http(400));
        assert!(!is_retryable_http(401));
        assert!(!is_retryable_http(403));
        assert!(!is_retryable_http(404));
        assert!(!is_retryable_http(200));
        assert!(!is_retryable_http(201));
    }

    #[test]
    fn test_retry_backoff_configuration() {
        let backoff = retry_backoff();
        // Verify it's an ExponentialBuilder (type check at compile time)
        let _: ExponentialBuilder = backoff;
    }

    #[test]
    fn test_is_retryable_anyhow_with_non_retryable() {
        let err = anyhow::anyhow!("some other error");
        assert!(!is_retryable_anyhow(&err));
    }
}
