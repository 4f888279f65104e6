// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rf-core: Shared data types for the review feed.
//!
//! This crate holds the pieces of the feed that perform no I/O: the review
//! record and its wire form, the feed state machine, the fallback sample set,
//! and the clock seam used to timestamp that sample set.

pub mod clock;
pub mod error;
pub mod fallback;
pub mod review;
pub mod state;

pub use clock::{ClockSource, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use fallback::{fallback_reviews, FALLBACK_MESSAGE};
pub use review::{duplicate_ids, parse_reviews, Review, ReviewId};
pub use state::{FeedState, Generation};
