// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Review feed fetching.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐ spawn ┌──────────────┐ GET  ┌──────────────┐
//! │  FeedSession │──────►│  Dispatcher  │─────►│  Review API  │
//! │ (controller) │◄──────│ (tokio tasks)│◄─────│ (ReviewSource)│
//! └──────────────┘ event └──────────────┘      └──────────────┘
//!        │
//!        ▼
//!    FeedState ──► display::render
//! ```
//!
//! The controller is the only writer of [`FeedState`](rf_core::FeedState).
//! Every refresh is tagged with a [`Generation`](rf_core::Generation); only
//! the outcome of the newest one is committed.

mod controller;
mod dispatch;
mod source;

pub use controller::{Commit, FeedController};
pub use dispatch::{FeedSession, FetchDispatcher, FetchEvent};
pub use source::{FetchError, FetchFuture, FetchResult, HttpSource, ReviewSource};

#[cfg(test)]
pub(crate) mod test_helpers;
