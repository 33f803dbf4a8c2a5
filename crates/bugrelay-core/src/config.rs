// SPDX-License-Identifier: Apache-2.0

//! Configuration management for Bugrelay.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `BUGRELAY_`)
//! 2. Config file: `~/.config/bugrelay/config.toml`
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Override the target repository via environment variable
//! BUGRELAY_GITHUB__REPO=owner/repo bugrelay report "Err X"
//! ```

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::RelayError;
use crate::resolver::{DEFAULT_MAX_SUGGESTIONS, DEFAULT_MIN_RATIO};

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// GitHub API settings.
    pub github: GitHubConfig,
    /// Reporting behavior.
    pub report: ReportConfig,
}

/// GitHub API settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Default target repository in `owner/repo` form.
    pub repo: Option<String>,
    /// API request timeout in seconds.
    pub api_timeout_seconds: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            repo: None,
            api_timeout_seconds: 10,
        }
    }
}

/// Reporting behavior.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Minimum similarity ratio (0-100) for an issue to be suggested.
    pub min_ratio: u8,
    /// Maximum number of similar-issue suggestions.
    pub max_suggestions: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            min_ratio: DEFAULT_MIN_RATIO,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

/// Returns the Bugrelay configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/bugrelay`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("bugrelay");
    }
    dirs::home_dir()
        .expect("Could not determine home directory - is HOME set?")
        .join(".config")
        .join("bugrelay")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration.
///
/// Loads from config file (if exists) and environment variables.
/// Environment variables use the prefix `BUGRELAY_` and double underscore
/// for nested keys (e.g., `BUGRELAY_GITHUB__REPO`).
///
/// # Errors
///
/// Returns `RelayError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, RelayError> {
    let config_path = config_file_path();

    let config = Config::builder()
        // Load from config file (optional - may not exist)
        .add_source(File::with_name(config_path.to_string_lossy().as_ref()).required(false))
        // Override with environment variables
        .add_source(
            Environment::with_prefix("BUGRELAY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn test_load_config_defaults() {
        // Without any config file or env vars, should return defaults
        let config = load_config().expect("should load with defaults");

        assert_eq!(config.github.repo, None);
        assert_eq!(config.github.api_timeout_seconds, 10);
        assert_eq!(config.report.min_ratio, 60);
        assert_eq!(config.report.max_suggestions, 5);
    }

    #[test]
    #[serial]
    fn test_env_override_repo() {
        unsafe {
            std::env::set_var("BUGRELAY_GITHUB__REPO", "octocat/Hello-World");
        }
        let config = load_config().expect("should load with env override");
        unsafe {
            std::env::remove_var("BUGRELAY_GITHUB__REPO");
        }

        assert_eq!(config.github.repo, Some("octocat/Hello-World".to_string()));
    }

    #[test]
    fn test_config_dir_exists() {
        let dir = config_dir();
        assert!(dir.ends_with("bugrelay"));
    }

    #[test]
    fn test_config_file_path() {
        let path = config_file_path();
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn test_config_from_toml_string() {
        let config_str = r#"
[github]
repo = "owner/repo"

[report]
min_ratio = 75
max_suggestions = 3
"#;

        let config = Config::builder()
            .add_source(config::File::from_str(config_str, config::FileFormat::Toml))
            .build()
            .expect("should build config");

        let app_config: AppConfig = config.try_deserialize().expect("should deserialize");

        assert_eq!(app_config.github.repo, Some("owner/repo".to_string()));
        assert_eq!(app_config.report.min_ratio, 75);
        assert_eq!(app_config.report.max_suggestions, 3);
    }
}
