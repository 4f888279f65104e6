// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing subscriber setup.
//!
//! The filter comes from `REVIEWFEED_LOG` (e.g. `REVIEWFEED_LOG=rfeed=debug`),
//! falling back to `warn`, or `debug` with `--verbose`.

use std::fs;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "REVIEWFEED_LOG";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Append to a file (used by `watch`, which owns the terminal).
    File(PathBuf),
    /// Discard everything.
    Off,
}

fn build_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { "debug" } else { "warn" };
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbose: bool, target: LogTarget) {
    let filter = build_filter(verbose);

    match target {
        LogTarget::Off => {}
        LogTarget::File(path) => {
            // Fall back to stderr if the file cannot be opened
            if let Ok(file) = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
            {
                let _ = tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(file)
                    .with_ansi(false)
                    .try_init();
            } else {
                let _ = tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .try_init();
            }
        }
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}
