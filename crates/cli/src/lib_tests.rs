// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

//! Tests for command routing and log target selection.
//!
//! Commands that talk to the Review API are exercised by the integration
//! tests, which run the binary against a local listener.

use super::*;
use clap::Parser;
use std::path::PathBuf;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn show_logs_to_stderr() {
    assert_eq!(log_target(&parse(&["reviewfeed"])), LogTarget::Stderr);
    assert_eq!(log_target(&parse(&["reviewfeed", "show"])), LogTarget::Stderr);
}

#[test]
fn watch_is_silent_without_log_file() {
    assert_eq!(log_target(&parse(&["reviewfeed", "watch"])), LogTarget::Off);
}

#[test]
fn log_file_wins() {
    let cli = parse(&["reviewfeed", "watch", "--log-file", "/tmp/feed.log"]);
    assert_eq!(log_target(&cli), LogTarget::File(PathBuf::from("/tmp/feed.log")));
}

#[test]
fn invalid_url_fails_before_fetching() {
    let err = run(
        Command::Show {
            output: OutputFormat::Text,
            expand: false,
        },
        Some("ftp://example.com".to_string()),
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidApiUrl { .. }));
}

#[test]
fn completion_generates() {
    assert!(run(
        Command::Completion {
            shell: clap_complete::Shell::Bash
        },
        None
    )
    .is_ok());
}
