// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

/// ANSI 256-color codes for dashboard output
pub mod codes {
    /// Section headers and column titles: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Primary cell content: light grey
    pub const LITERAL: u8 = 250;
    /// Secondary content (contact, time, hints): medium grey
    pub const CONTEXT: u8 = 245;
    /// Degradation banner: amber
    pub const WARNING: u8 = 214;
    /// Avatar initials: indigo
    pub const AVATAR: u8 = 99;

    /// Pre-formatted ANSI escape sequences for use in tests
    pub const HEADER_START: &str = "\x1b[38;5;74m";
    pub const WARNING_START: &str = "\x1b[38;5;214m";
    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    // NO_COLOR=1 disables colors
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }

    // COLOR=1 forces colors even without TTY
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }

    // Default: enable colors only if stdout is a TTY
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    format!("{}{}{}", fg256(code), text, RESET)
}

/// Apply header color (titles, column names) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (primary values) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (secondary values, hints) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Apply warning color (degradation banner) to text.
pub fn warning(text: &str) -> String {
    paint(codes::WARNING, text)
}

/// Apply avatar color to text.
pub fn avatar(text: &str) -> String {
    paint(codes::AVATAR, text)
}

/// Colorize an examples block for help output.
///
/// Lines ending in `:` become headers. On other lines the command (text before
/// the first run of two spaces) is shown as a literal.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    text.lines()
        .map(colorize_example_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn colorize_example_line(line: &str) -> String {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];
    if trimmed.ends_with(':') && !trimmed.contains("  ") {
        return format!("{}{}", indent, header(trimmed));
    }
    match trimmed.find("  ") {
        Some(end) => format!("{}{}{}", indent, literal(&trimmed[..end]), &trimmed[end..]),
        None => line.to_string(),
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
