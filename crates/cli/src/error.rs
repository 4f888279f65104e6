// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the rfeed library.
///
/// Fetch failures are deliberately absent: they degrade the feed to fallback
/// data instead of surfacing here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("config already exists at {0}\n  hint: edit it directly or remove it first")]
    ConfigExists(String),

    #[error("invalid API URL '{url}': {reason}\n  hint: use http://host:port or https://host")]
    InvalidApiUrl { url: String, reason: String },

    #[error("no configuration directory found\n  hint: set REVIEWFEED_CONFIG to a file path")]
    NoConfigDir,

    #[error("http client error: {0}")]
    HttpClient(String),

    #[error("async runtime error: {0}")]
    Runtime(String),

    #[error("interactive mode requires a terminal (TTY)")]
    TtyRequired,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for rfeed operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
