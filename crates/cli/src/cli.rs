// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "reviewfeed")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal dashboard for customer reviews collected by the messaging bot")]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Base URL of the Review API (overrides config and REVIEWFEED_API_URL)
    #[arg(long, global = true, value_name = "url")]
    pub url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs to a file instead of stderr
    #[arg(long, global = true, value_name = "path")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The command to run; bare `reviewfeed` means `show`.
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or_default()
    }
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Fetch the feed once and print it
    #[command(after_help = colors::examples("\
Examples:
  reviewfeed show              Print the feed as a table
  reviewfeed show -o json      Print the feed as JSON
  reviewfeed show --expand     Print full review text"))]
    Show {
        /// Output format
        #[arg(long, short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,

        /// Show full review text instead of truncating
        #[arg(long, short = 'e')]
        expand: bool,
    },

    /// Live dashboard: r refreshes, e toggles full reviews, q quits
    Watch {
        /// Start with full review text shown
        #[arg(long, short = 'e')]
        expand: bool,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Show {
            output: OutputFormat::Text,
            expand: false,
        }
    }
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
