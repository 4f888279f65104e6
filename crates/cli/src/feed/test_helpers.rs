// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for feed module tests.

#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};
use rf_core::{FixedClock, Review, ReviewId};
use tokio::sync::oneshot;

use super::source::{FetchError, FetchFuture, FetchResult, ReviewSource};

/// The instant the fixed test clock reports.
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 15, 0).unwrap()
}

pub fn test_clock() -> FixedClock {
    FixedClock(test_now())
}

/// Create a review with the given id and user name.
pub fn make_review(id: i64, user: &str) -> Review {
    Review {
        id: ReviewId::Int(id),
        user_name: user.to_string(),
        product_name: format!("Product {}", id),
        product_review: format!("Review text {}", id),
        created_at: "2024-01-01T10:00:00Z".to_string(),
        contact_number: format!("+1555000{:04}", id),
        status: None,
    }
}

struct Scripted {
    outcome: FetchResult<Vec<Review>>,
    gate: Option<oneshot::Receiver<()>>,
}

/// Mock source returning scripted outcomes in call order.
///
/// A gated outcome is held back until its sender fires, which lets tests
/// choose the order in which overlapping fetches resolve.
pub struct MockSource {
    script: Mutex<VecDeque<Scripted>>,
    calls: AtomicUsize,
}

impl MockSource {
    pub fn new() -> Self {
        MockSource {
            script: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn push_ok(&self, reviews: Vec<Review>) {
        self.push(Ok(reviews), None);
    }

    pub fn push_err(&self, err: FetchError) {
        self.push(Err(err), None);
    }

    /// Queue an outcome that resolves only after the returned sender fires.
    pub fn push_gated(&self, outcome: FetchResult<Vec<Review>>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.push(outcome, Some(rx));
        tx
    }

    /// Number of times `fetch` was called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(&self, outcome: FetchResult<Vec<Review>>, gate: Option<oneshot::Receiver<()>>) {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted { outcome, gate });
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewSource for MockSource {
    fn fetch(&self) -> FetchFuture {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().unwrap().pop_front();
        Box::pin(async move {
            let Some(scripted) = next else {
                return Err(FetchError::Transport("no scripted response".into()));
            };
            if let Some(gate) = scripted.gate {
                let _ = gate.await;
            }
            scripted.outcome
        })
    }
}
