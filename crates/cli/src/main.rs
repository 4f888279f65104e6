// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use rfeed::Cli;

fn main() {
    let cli = Cli::parse();
    rfeed::logging::init(cli.verbose, rfeed::log_target(&cli));
    let command = cli.command_or_default();
    if let Err(e) = rfeed::run(command, cli.url) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
