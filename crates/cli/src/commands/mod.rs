// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod config;
pub mod show;
pub mod watch;

use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::feed::{FeedController, FeedSession, HttpSource};

/// Build a feed session against the configured Review API.
pub fn open_session(config: &Config) -> Result<FeedSession<HttpSource>> {
    let source = HttpSource::new(config.reviews_url())?;
    Ok(FeedSession::new(Arc::new(source), FeedController::new()))
}

/// Create the runtime that drives fetches for one command.
pub fn new_runtime() -> Result<Runtime> {
    Runtime::new().map_err(|e| Error::Runtime(e.to_string()))
}
