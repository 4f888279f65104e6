// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot feed output.

use std::sync::Arc;

use rf_core::{ClockSource, FeedState};

use crate::cli::OutputFormat;
use crate::colors;
use crate::config::Config;
use crate::display::{self, RenderOptions};
use crate::error::Result;
use crate::feed::{FeedController, FeedSession, HttpSource, ReviewSource};

use super::new_runtime;

/// Fetch the feed once and print it.
///
/// A failed fetch still prints (demo data plus the warning banner) and
/// succeeds; only setup problems are errors.
pub fn run(config: &Config, output: OutputFormat, expand: bool) -> Result<()> {
    let runtime = new_runtime()?;
    let source = Arc::new(HttpSource::new(config.reviews_url())?);
    let state = runtime.block_on(fetch_once(source, FeedController::new()));

    let text = format_state(&state, config, output, expand, colors::should_colorize())?;
    println!("{}", text);
    Ok(())
}

/// Fetch through an arbitrary source and return the settled state.
pub async fn fetch_once<S, C>(source: Arc<S>, controller: FeedController<C>) -> FeedState
where
    S: ReviewSource + ?Sized,
    C: ClockSource,
{
    let mut session = FeedSession::new(source, controller);
    let generation = session.refresh();
    tracing::debug!(%generation, "refresh started");
    session.settle().await;
    session.into_state()
}

/// Render a settled state in the requested format.
pub fn format_state(
    state: &FeedState,
    config: &Config,
    output: OutputFormat,
    expand: bool,
    color: bool,
) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(display::render(
            state,
            &RenderOptions::from_config(config, expand, color),
        )),
        OutputFormat::Json => display::render_json(state),
    }
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
