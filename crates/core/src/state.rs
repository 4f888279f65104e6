// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Feed state machine.
//!
//! ```text
//!            mount / refresh
//!   ┌────────────────────────────┐
//!   ▼                            │
//! Loading ──ok──► Ready ─────────┤
//!    │                           │
//!    └──err──► ReadyWithWarning ─┘
//! ```
//!
//! `Loading` keeps whatever was on screen so the view can show stale rows
//! while a refresh is pending.

use serde::Serialize;
use std::fmt;

use crate::review::Review;

/// Marker for one issued fetch. Later requests carry larger generations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation following this one.
    pub fn next(self) -> Self {
        Generation(self.0.saturating_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The single source of truth for what the feed shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedState {
    /// A fetch is pending. `previous` holds the rows displayed before it started.
    Loading { previous: Vec<Review> },
    /// Live data from the API (possibly empty).
    Ready { reviews: Vec<Review> },
    /// The fetch failed; `reviews` is the fallback set.
    ReadyWithWarning {
        reviews: Vec<Review>,
        message: String,
    },
}

impl Default for FeedState {
    fn default() -> Self {
        FeedState::Loading {
            previous: Vec::new(),
        }
    }
}

impl FeedState {
    /// Rows to display, in order. Never absent.
    pub fn reviews(&self) -> &[Review] {
        match self {
            FeedState::Loading { previous } => previous,
            FeedState::Ready { reviews } | FeedState::ReadyWithWarning { reviews, .. } => reviews,
        }
    }

    /// The degradation message, if fallback data is showing.
    pub fn warning(&self) -> Option<&str> {
        match self {
            FeedState::ReadyWithWarning { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FeedState::Loading { .. })
    }

    /// Short lowercase name of the active variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedState::Loading { .. } => "loading",
            FeedState::Ready { .. } => "ready",
            FeedState::ReadyWithWarning { .. } => "ready_with_warning",
        }
    }

    /// Move into `Loading`, carrying the displayed rows forward.
    ///
    /// Any warning is dropped: the banner belongs to the previous outcome.
    pub fn into_loading(self) -> FeedState {
        match self {
            FeedState::Loading { previous } => FeedState::Loading { previous },
            FeedState::Ready { reviews } | FeedState::ReadyWithWarning { reviews, .. } => {
                FeedState::Loading { previous: reviews }
            }
        }
    }
}

impl fmt::Display for FeedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
