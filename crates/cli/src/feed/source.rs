// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Source abstraction for the review collection.
//!
//! Provides a trait-based source so the controller can run against:
//! - The HTTP Review API in production
//! - Scripted mock sources in unit tests

use std::future::Future;
use std::pin::Pin;
use std::time::Instant;

use reqwest::header::ACCEPT;
use rf_core::{parse_reviews, Review};

use crate::error::{Error, Result};

/// Why a fetch failed. Detail is for logs; callers treat every variant alike.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Network-level failure (refused, reset, DNS, TLS).
    #[error("request failed: {0}")]
    Transport(String),

    /// The API answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// The body was not a review array.
    #[error("malformed body: {0}")]
    Malformed(String),
}

/// Result type for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// A pending fetch. Owns everything it needs so it can outlive the call site.
pub type FetchFuture = Pin<Box<dyn Future<Output = FetchResult<Vec<Review>>> + Send + 'static>>;

/// Anything that can produce the ordered review collection.
pub trait ReviewSource: Send + Sync {
    /// Start one read of the collection.
    ///
    /// The returned future does not borrow the source, so it can be moved
    /// onto a spawned task.
    fn fetch(&self) -> FetchFuture;
}

/// `GET /api/reviews` over HTTP using reqwest.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    /// Create a source for the given endpoint URL.
    ///
    /// No request timeout is configured; the transport default applies.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;
        Ok(HttpSource {
            url: url.into(),
            client,
        })
    }

    /// The endpoint this source reads from.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ReviewSource for HttpSource {
    fn fetch(&self) -> FetchFuture {
        let request = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send();
        let url = self.url.clone();

        Box::pin(async move {
            let start = Instant::now();
            let response = request
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            let status = response.status();
            tracing::debug!(
                %url,
                status = status.as_u16(),
                duration_ms = start.elapsed().as_millis() as u64,
                "response received"
            );
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let body = response
                .text()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            parse_reviews(&body).map_err(|e| FetchError::Malformed(e.to_string()))
        })
    }
}

impl<S: ReviewSource + ?Sized> ReviewSource for std::sync::Arc<S> {
    fn fetch(&self) -> FetchFuture {
        (**self).fetch()
    }
}
