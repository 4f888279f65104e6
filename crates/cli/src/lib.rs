// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rfeed - A terminal dashboard for customer reviews.
//!
//! This crate provides the functionality behind the `reviewfeed` CLI, which
//! reads reviews collected by a messaging bot from the Review API and shows
//! them as a table.
//!
//! # Main Components
//!
//! - [`feed`] - Fetching: the [`ReviewSource`](feed::ReviewSource) seam, the
//!   generation-ordered [`FeedController`](feed::FeedController), and the
//!   background [`FeedSession`](feed::FeedSession)
//! - [`display`] - Pure rendering of a [`FeedState`](rf_core::FeedState)
//! - [`Config`] - API location and layout settings
//! - [`Error`] - Error types for all operations
//!
//! # Fetching once
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rfeed::feed::{FeedController, FeedSession, HttpSource};
//!
//! let source = HttpSource::new("http://localhost:8000/api/reviews")?;
//! let mut session = FeedSession::new(Arc::new(source), FeedController::new());
//! session.refresh();
//! session.settle().await;
//! println!("{}", rfeed::display::render(session.state(), &opts));
//! ```

mod cli;
pub mod colors;
mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod feed;
pub mod help;
pub mod logging;

pub use cli::{Cli, Command, ConfigCommand, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

use logging::LogTarget;

/// Where logs should go for this invocation.
///
/// `watch` owns the terminal, so it logs nowhere unless given a file.
pub fn log_target(cli: &Cli) -> LogTarget {
    match (&cli.log_file, &cli.command) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, Some(Command::Watch { .. })) => LogTarget::Off,
        (None, _) => LogTarget::Stderr,
    }
}

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command, url: Option<String>) -> Result<()> {
    match command {
        Command::Show { output, expand } => {
            let config = config::resolve(url)?;
            commands::show::run(&config, output, expand)
        }
        Command::Watch { expand } => {
            let config = config::resolve(url)?;
            commands::watch::run(&config, expand)
        }
        Command::Config(cmd) => commands::config::run(cmd, url),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "reviewfeed", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
