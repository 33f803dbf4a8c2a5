// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the Bugrelay CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging.
//! Log level can be controlled via the `RUST_LOG` environment variable.
//!
//! # Examples
//!
//! ```bash
//! # Default: warnings only
//! bugrelay report "Err X"
//!
//! # Debug output for troubleshooting
//! RUST_LOG=bugrelay=debug bugrelay report "Err X"
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging subsystem.
///
/// Logs go to stderr so the outcome summary on stdout stays pipeable.
/// The `RUST_LOG` environment variable overrides the default filter.
pub fn init_logging(verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let default_filter = if verbose {
        "bugrelay=debug,octocrab=warn"
    } else {
        "bugrelay=warn,octocrab=error"
    };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
