// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Background fetch tasks.
//!
//! Each refresh runs on its own tokio task so the caller stays responsive to
//! input while requests are pending. Outcomes come back over a channel tagged
//! with their generation; the [`FeedSession`] that owns the controller is the
//! only place they are committed.

use std::sync::Arc;
use std::time::Instant;

use rf_core::{ClockSource, FeedState, Generation, Review, SystemClock};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::controller::{Commit, FeedController};
use super::source::{FetchResult, ReviewSource};

/// Outcome of one fetch, delivered to the session.
#[derive(Debug)]
pub struct FetchEvent {
    pub generation: Generation,
    pub outcome: FetchResult<Vec<Review>>,
}

/// Spawns fetch tasks and reports their outcomes.
pub struct FetchDispatcher<S: ReviewSource + ?Sized> {
    source: Arc<S>,
    event_tx: mpsc::Sender<FetchEvent>,
}

impl<S: ReviewSource + ?Sized> FetchDispatcher<S> {
    /// Create a dispatcher.
    ///
    /// Returns the dispatcher and a receiver for fetch events.
    pub fn new(source: Arc<S>) -> (Self, mpsc::Receiver<FetchEvent>) {
        let (event_tx, event_rx) = mpsc::channel(16);
        (FetchDispatcher { source, event_tx }, event_rx)
    }

    /// Start a fetch for `generation` on a background task.
    ///
    /// The transport request is never cancelled; a superseded result is
    /// dropped when it is committed.
    pub fn spawn_fetch(&self, generation: Generation) -> JoinHandle<()> {
        let fetch = self.source.fetch();
        let event_tx = self.event_tx.clone();

        tokio::spawn(async move {
            let start = Instant::now();
            let outcome = fetch.await;
            tracing::debug!(
                %generation,
                ok = outcome.is_ok(),
                duration_ms = start.elapsed().as_millis() as u64,
                "fetch finished"
            );
            // Receiver gone means the session ended; nothing left to update
            let _ = event_tx.send(FetchEvent { generation, outcome }).await;
        })
    }
}

/// A controller paired with its dispatcher: the feed's single writer.
pub struct FeedSession<S: ReviewSource + ?Sized, C: ClockSource = SystemClock> {
    controller: FeedController<C>,
    dispatcher: FetchDispatcher<S>,
    events: mpsc::Receiver<FetchEvent>,
}

impl<S: ReviewSource + ?Sized, C: ClockSource> FeedSession<S, C> {
    /// Create a session. Nothing is fetched until [`refresh`](Self::refresh).
    pub fn new(source: Arc<S>, controller: FeedController<C>) -> Self {
        let (dispatcher, events) = FetchDispatcher::new(source);
        FeedSession {
            controller,
            dispatcher,
            events,
        }
    }

    pub fn state(&self) -> &FeedState {
        self.controller.state()
    }

    pub fn into_state(self) -> FeedState {
        self.controller.into_state()
    }

    /// Enter `Loading` and start a fetch in the background.
    pub fn refresh(&mut self) -> Generation {
        let generation = self.controller.begin_refresh();
        // Detached: completion is observed through the event channel
        let _ = self.dispatcher.spawn_fetch(generation);
        generation
    }

    /// Wait for the next fetch outcome (any generation).
    pub async fn next_event(&mut self) -> Option<FetchEvent> {
        self.events.recv().await
    }

    /// Commit an outcome through the controller.
    pub fn apply(&mut self, event: FetchEvent) -> Commit {
        self.controller.commit(event.generation, event.outcome)
    }

    /// Process outcomes until the latest refresh has been committed.
    pub async fn settle(&mut self) {
        while self.controller.has_pending() {
            match self.events.recv().await {
                Some(event) => {
                    let _ = self.apply(event);
                }
                None => break,
            }
        }
    }
}
