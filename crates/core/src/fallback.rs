// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sample reviews shown when the Review API cannot be reached.
//!
//! The records are fixed literals; only their timestamps move, as offsets of
//! whole days back from the moment of failure.

use chrono::{DateTime, Duration, SecondsFormat, Utc};

use crate::review::{Review, ReviewId};

/// Warning attached to the feed whenever fallback data is on display.
pub const FALLBACK_MESSAGE: &str = "Could not fetch reviews. Ensure the backend is running.";

/// (id, user, product, review, contact, days before now)
const SAMPLES: &[(i64, &str, &str, &str, &str, i64)] = &[
    (
        1,
        "Aditi",
        "iPhone 15",
        "Amazing battery life, very satisfied with the camera quality too!",
        "+14155550100",
        0,
    ),
    (
        2,
        "Rahul",
        "Sony WH-1000XM5",
        "Noise cancellation is top notch, but the earcups get warm.",
        "+14155550101",
        1,
    ),
    (
        3,
        "Sarah",
        "MacBook Air M2",
        "The midnight color is stunning but attracts fingerprints. Performance is beastly.",
        "+14155550102",
        2,
    ),
];

/// Build the fallback set relative to `now`.
pub fn fallback_reviews(now: DateTime<Utc>) -> Vec<Review> {
    SAMPLES
        .iter()
        .map(|&(id, user, product, text, contact, days_ago)| Review {
            id: ReviewId::Int(id),
            user_name: user.to_string(),
            product_name: product.to_string(),
            product_review: text.to_string(),
            created_at: (now - Duration::days(days_ago))
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            contact_number: contact.to_string(),
            status: None,
        })
        .collect()
}

#[cfg(test)]
#[path = "fallback_tests.rs"]
mod tests;
