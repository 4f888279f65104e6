// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles matching the dashboard palette.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);
    let context = fg(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(fg(colors::codes::LITERAL))
        .placeholder(context)
        .valid(context)
        .invalid(fg(colors::codes::WARNING))
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_feed}
  {show}        Fetch the feed once and print it (default)
  {watch}       Live dashboard with manual refresh

{header_setup}
  {config}      Show or create the configuration file
  {completion}  Generate shell completions
",
        header_feed = colors::header("Feed:"),
        header_setup = colors::header("Setup:"),
        show = colors::literal("show"),
        watch = colors::literal("watch"),
        config = colors::literal("config"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  reviewfeed                         Show the current feed
  reviewfeed watch                   Open the live dashboard
  reviewfeed --url http://api:8000   Use a different backend
  reviewfeed config init             Write a default config file",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
