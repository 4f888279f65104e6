// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fetch controller: the single owner of the feed state.
//!
//! Provides:
//! - `Loading` transitions that keep stale rows visible
//! - Live/fallback reconciliation of fetch outcomes
//! - Generation tracking so a slow, superseded fetch never overwrites a newer one

use rf_core::{
    duplicate_ids, fallback_reviews, ClockSource, FeedState, Generation, Review, SystemClock,
    FALLBACK_MESSAGE,
};

use super::source::{FetchResult, ReviewSource};

/// What happened to a fetch outcome handed to [`FeedController::commit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// The outcome became the current state.
    Applied,
    /// A newer refresh was issued (or none is pending); the outcome was dropped.
    Stale { latest: Generation },
}

/// Owns [`FeedState`] and the generation counter.
pub struct FeedController<C: ClockSource = SystemClock> {
    state: FeedState,
    /// Most recently issued generation.
    latest: Generation,
    /// Generation still awaiting its outcome, if any.
    pending: Option<Generation>,
    /// Stamps the fallback set at the moment of failure.
    clock: C,
}

impl FeedController<SystemClock> {
    /// Create a controller in the mount state (`Loading`, no data).
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for FeedController<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ClockSource> FeedController<C> {
    /// Create a controller with a custom clock (for testing).
    pub fn with_clock(clock: C) -> Self {
        FeedController {
            state: FeedState::default(),
            latest: Generation::default(),
            pending: None,
            clock,
        }
    }

    /// The current state.
    pub fn state(&self) -> &FeedState {
        &self.state
    }

    /// Consume the controller, returning its state.
    pub fn into_state(self) -> FeedState {
        self.state
    }

    /// The most recently issued generation.
    pub fn latest_generation(&self) -> Generation {
        self.latest
    }

    /// Returns true while the latest refresh has not been committed.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Enter `Loading` and issue a new generation.
    ///
    /// Any earlier pending generation is superseded.
    pub fn begin_refresh(&mut self) -> Generation {
        self.latest = self.latest.next();
        if let Some(superseded) = self.pending.replace(self.latest) {
            tracing::debug!(%superseded, latest = %self.latest, "refresh superseded");
        }
        let state = std::mem::take(&mut self.state);
        self.state = state.into_loading();
        self.latest
    }

    /// Apply the outcome of `generation` if it is the pending one.
    ///
    /// Success becomes `Ready` (an empty list included). Any failure becomes
    /// `ReadyWithWarning` carrying the complete fallback set, replacing
    /// whatever was displayed.
    pub fn commit(&mut self, generation: Generation, outcome: FetchResult<Vec<Review>>) -> Commit {
        if self.pending != Some(generation) {
            tracing::debug!(%generation, latest = %self.latest, "discarding stale fetch outcome");
            return Commit::Stale {
                latest: self.latest,
            };
        }
        self.pending = None;

        self.state = match outcome {
            Ok(reviews) => {
                let dups = duplicate_ids(&reviews);
                if !dups.is_empty() {
                    let ids: Vec<String> = dups.iter().map(ToString::to_string).collect();
                    tracing::warn!(ids = %ids.join(", "), "review API returned duplicate ids");
                }
                tracing::debug!(%generation, count = reviews.len(), "reviews loaded");
                FeedState::Ready { reviews }
            }
            Err(e) => {
                tracing::warn!(%generation, error = %e, "API error, showing fallback reviews");
                FeedState::ReadyWithWarning {
                    reviews: fallback_reviews(self.clock.now()),
                    message: FALLBACK_MESSAGE.to_string(),
                }
            }
        };
        Commit::Applied
    }

    /// Refresh and wait for the outcome in place.
    pub async fn refresh<S: ReviewSource + ?Sized>(&mut self, source: &S) -> Commit {
        let generation = self.begin_refresh();
        let outcome = source.fetch().await;
        self.commit(generation, outcome)
    }
}
