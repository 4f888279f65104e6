// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Presentation of the feed state.
//!
//! Everything here is a pure function of its inputs. Values are formatted for
//! display only; the reviews themselves are never modified.

use chrono::{DateTime, Local, Utc};
use rf_core::review::parse_timestamp;
use rf_core::{FeedState, Review};
use serde::Serialize;

use crate::colors;
use crate::config::Config;
use crate::error::Result;

/// Characters of the contact number left visible.
pub const MASK_PREFIX_LEN: usize = 12;
/// Appended in place of the hidden remainder.
pub const MASK_MARKER: &str = "xxxxxxx";
/// Avatar shown when the user gave no name.
pub const AVATAR_PLACEHOLDER: &str = "?";
/// Shown in place of an unparseable timestamp.
pub const TIME_PLACEHOLDER: &str = "-";

pub const TITLE: &str = "Customer Feedback";
pub const SUBTITLE: &str = "Real-time customer feedback collected via Twilio Bot";
pub const BANNER_TITLE: &str = "Backend Connection Failed";
pub const LOADING_TEXT: &str = "Loading reviews...";
pub const REFRESHING_TEXT: &str = "Refreshing...";
pub const EMPTY_TITLE: &str = "No reviews yet";
pub const EMPTY_HINT: &str = "Send a message to the WhatsApp bot to get started!";

/// e.g. `Jan 1, 10:00 AM`
const TIME_FORMAT: &str = "%b %-d, %I:%M %p";
const ELLIPSIS: char = '…';
const COLUMN_GAP: &str = "  ";
const CONTACT_INDENT: &str = "    ";
const HEADERS: [&str; 4] = ["USER", "PRODUCT", "REVIEW", "TIME"];

/// Timezone used for the TIME column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    Utc,
    Local,
}

/// Layout and styling knobs for [`render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Named in the degradation banner.
    pub api_url: String,
    pub review_width: usize,
    /// Lines of review text before truncation (ignored when expanded).
    pub review_lines: usize,
    pub expanded: bool,
    pub zone: DisplayZone,
    pub color: bool,
}

impl RenderOptions {
    pub fn from_config(config: &Config, expanded: bool, color: bool) -> Self {
        RenderOptions {
            api_url: config.api_url.clone(),
            review_width: config.review_width,
            review_lines: config.review_lines,
            expanded,
            zone: if config.utc {
                DisplayZone::Utc
            } else {
                DisplayZone::Local
            },
            color,
        }
    }
}

/// First character of the name, uppercased, or a placeholder for no name.
pub fn avatar_initial(user_name: &str) -> String {
    match user_name.trim().chars().next() {
        Some(c) => c.to_uppercase().collect(),
        None => AVATAR_PLACEHOLDER.to_string(),
    }
}

/// Keep a fixed prefix of the contact number and mask the rest.
pub fn mask_contact(number: &str) -> String {
    let prefix: String = number.chars().take(MASK_PREFIX_LEN).collect();
    format!("{}{}", prefix, MASK_MARKER)
}

/// Format a raw `created_at` value, or a placeholder if it cannot be parsed.
pub fn format_created_at(raw: &str, zone: DisplayZone) -> String {
    match parse_timestamp(raw) {
        Some(dt) => format_instant(dt, zone),
        None => TIME_PLACEHOLDER.to_string(),
    }
}

fn format_instant(dt: DateTime<Utc>, zone: DisplayZone) -> String {
    match zone {
        DisplayZone::Utc => dt.format(TIME_FORMAT).to_string(),
        DisplayZone::Local => dt.with_timezone(&Local).format(TIME_FORMAT).to_string(),
    }
}

fn format_review_time(review: &Review, zone: DisplayZone) -> String {
    review
        .created_at_utc()
        .map_or_else(|| TIME_PLACEHOLDER.to_string(), |dt| format_instant(dt, zone))
}

/// Wrap text at word boundaries to `width` characters.
///
/// Runs of whitespace (newlines included) collapse to single spaces. Words
/// longer than `width` are split.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for (i, chunk) in chars.chunks(width).enumerate() {
            let piece: String = chunk.iter().collect();
            let piece_len = chunk.len();
            if current_len == 0 {
                current = piece;
                current_len = piece_len;
            } else if i == 0 && current_len + 1 + piece_len <= width {
                current.push(' ');
                current.push_str(&piece);
                current_len += 1 + piece_len;
            } else {
                lines.push(std::mem::take(&mut current));
                current = piece;
                current_len = piece_len;
            }
        }
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Wrap review text and, when `max_lines` is set, cut it with an ellipsis.
///
/// Always returns at least one (possibly empty) line.
pub fn clamp_review(text: &str, width: usize, max_lines: Option<usize>) -> Vec<String> {
    let mut lines = wrap_words(text, width);
    if let Some(max) = max_lines {
        let max = max.max(1);
        if lines.len() > max {
            lines.truncate(max);
            if let Some(last) = lines.last_mut() {
                *last = ellipsize(last, width);
            }
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn ellipsize(line: &str, width: usize) -> String {
    let keep = width.max(1) - 1;
    let mut out: String = line.chars().take(keep).collect();
    out.push(ELLIPSIS);
    out
}

/// One line of a table cell: the text used for width, and the text printed.
#[derive(Debug, Clone, Default)]
struct CellLine {
    plain: String,
    styled: String,
}

impl CellLine {
    fn new(plain: String, style: fn(&str) -> String, color: bool) -> Self {
        let styled = if color { style(&plain) } else { plain.clone() };
        CellLine { plain, styled }
    }

    /// Width in characters. Double-width glyphs (CJK, emoji) count as one,
    /// so rows containing them render wider than their column.
    fn width(&self) -> usize {
        self.plain.chars().count()
    }
}

type Row = [Vec<CellLine>; 4];

fn review_row(review: &Review, opts: &RenderOptions) -> Row {
    let badge = format!("[{}]", avatar_initial(&review.user_name));
    let name = review.user_name.trim();
    let user_line = if name.is_empty() {
        CellLine::new(badge, colors::avatar, opts.color)
    } else {
        CellLine {
            plain: format!("{} {}", badge, name),
            styled: if opts.color {
                format!("{} {}", colors::avatar(&badge), colors::literal(name))
            } else {
                format!("{} {}", badge, name)
            },
        }
    };
    let contact = CellLine::new(
        format!("{}{}", CONTACT_INDENT, mask_contact(&review.contact_number)),
        colors::context,
        opts.color,
    );

    let max_lines = if opts.expanded {
        None
    } else {
        Some(opts.review_lines)
    };
    let review_lines = clamp_review(&review.product_review, opts.review_width, max_lines)
        .into_iter()
        .map(|line| CellLine::new(line, colors::literal, opts.color))
        .collect();

    let mut time = vec![CellLine::new(
        format_review_time(review, opts.zone),
        colors::context,
        opts.color,
    )];
    if let Some(status) = review.status.as_deref().filter(|s| !s.is_empty()) {
        time.push(CellLine::new(status.to_string(), colors::context, opts.color));
    }

    [
        vec![user_line, contact],
        vec![CellLine::new(
            review.product_name.clone(),
            colors::literal,
            opts.color,
        )],
        review_lines,
        time,
    ]
}

fn join_cells(cells: [&CellLine; 4], widths: &[usize; 4]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        line.push_str(&cell.styled);
        if i + 1 < cells.len() {
            let pad = widths[i].saturating_sub(cell.width());
            line.extend(std::iter::repeat_n(' ', pad));
        }
    }
    line.trim_end().to_string()
}

/// Render the header, rule, and one block per review in received order.
fn render_table(reviews: &[Review], opts: &RenderOptions) -> Vec<String> {
    let header: [CellLine; 4] =
        HEADERS.map(|title| CellLine::new(title.to_string(), colors::header, opts.color));
    let rows: Vec<Row> = reviews.iter().map(|r| review_row(r, opts)).collect();

    let mut widths = header.each_ref().map(CellLine::width);
    for row in &rows {
        for (col, lines) in row.iter().enumerate() {
            for line in lines {
                widths[col] = widths[col].max(line.width());
            }
        }
    }

    let total: usize = widths.iter().sum::<usize>() + COLUMN_GAP.len() * (widths.len() - 1);
    let rule = "─".repeat(total);

    let mut out = Vec::new();
    out.push(join_cells(header.each_ref(), &widths));
    out.push(if opts.color { colors::context(&rule) } else { rule });

    let blank = CellLine::default();
    for (idx, row) in rows.iter().enumerate() {
        if idx > 0 {
            out.push(String::new());
        }
        let height = row.iter().map(Vec::len).max().unwrap_or(1);
        for line_idx in 0..height {
            let cells = row.each_ref().map(|col| col.get(line_idx).unwrap_or(&blank));
            out.push(join_cells(cells, &widths));
        }
    }
    out
}

fn banner(message: &str, opts: &RenderOptions) -> Vec<String> {
    let paint = |text: &str, style: fn(&str) -> String| {
        if opts.color {
            style(text)
        } else {
            text.to_string()
        }
    };
    vec![
        paint(&format!("! {}", BANNER_TITLE), colors::warning),
        format!("  {}", paint(message, colors::warning)),
        format!(
            "  {}",
            paint(
                &format!(
                    "Showing demo data. Ensure the API is running at {}.",
                    opts.api_url
                ),
                colors::context
            )
        ),
    ]
}

/// Render the whole dashboard for the given state.
///
/// Views:
/// - `Loading` with nothing displayed yet: a loading line
/// - `Loading` with earlier rows: a refreshing line above the stale table
/// - `Ready`/`ReadyWithWarning`: the table, or an explicit empty state
///
/// A warning banner precedes the table when fallback data is shown.
pub fn render(state: &FeedState, opts: &RenderOptions) -> String {
    let style = |text: &str, f: fn(&str) -> String| {
        if opts.color {
            f(text)
        } else {
            text.to_string()
        }
    };

    let mut out = vec![
        style(TITLE, colors::header),
        style(SUBTITLE, colors::context),
        String::new(),
    ];

    if let Some(message) = state.warning() {
        out.extend(banner(message, opts));
        out.push(String::new());
    }

    let reviews = state.reviews();
    if state.is_loading() && reviews.is_empty() {
        out.push(style(LOADING_TEXT, colors::context));
        return out.join("\n");
    }

    if state.is_loading() {
        out.push(style(REFRESHING_TEXT, colors::context));
        out.push(String::new());
    }

    out.extend(render_table(reviews, opts));

    if reviews.is_empty() {
        out.push(String::new());
        out.push(style(EMPTY_TITLE, colors::literal));
        out.push(style(EMPTY_HINT, colors::context));
    }

    out.join("\n")
}

/// JSON view of the feed state.
#[derive(Serialize)]
struct FeedJson<'a> {
    state: &'static str,
    warning: Option<&'a str>,
    reviews: &'a [Review],
}

/// Render the state as pretty-printed JSON.
pub fn render_json(state: &FeedState) -> Result<String> {
    let json = FeedJson {
        state: state.as_str(),
        warning: state.warning(),
        reviews: state.reviews(),
    };
    Ok(serde_json::to_string_pretty(&json)?)
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
