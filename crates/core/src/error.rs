// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for rf-core operations.

use thiserror::Error;

/// All possible errors that can occur in rf-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed review payload: {0}")]
    MalformedPayload(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for rf-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
