// SPDX-License-Identifier: Apache-2.0

//! Bugrelay - report application failures as tracked GitHub issues.
//!
//! A CLI that deduplicates failure reports against a repository's issue
//! history before creating anything new.

mod cli;
mod commands;
mod errors;
mod logging;
mod provider;

pub use provider::CliTokenProvider;

use anyhow::{Context, Result};
use bugrelay_core::config;
use clap::Parser;
use tracing::debug;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = config::load_config().context("Failed to load configuration")?;
    debug!("Configuration loaded successfully");

    match commands::run(cli.command, cli.repo.as_deref(), &config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            Err(e)
        }
    }
}
