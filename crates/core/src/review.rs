// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The review record served by the Review API.
//!
//! Wire format (`GET /api/reviews`): a JSON array of objects
//! `{ id, user_name, product_name, product_review, created_at, contact_number }`
//! with an optional `status`. Display order is response order; nothing here
//! sorts, filters, or deduplicates.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::{Error, Result};

/// Naive timestamp layouts accepted in addition to RFC 3339.
///
/// The backend stores `utcnow()` values without an offset, so these are read as UTC.
const NAIVE_LAYOUTS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Opaque review identifier: the API may send integers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReviewId {
    Int(i64),
    Text(String),
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewId::Int(n) => write!(f, "{}", n),
            ReviewId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ReviewId {
    fn from(n: i64) -> Self {
        ReviewId::Int(n)
    }
}

impl From<&str> for ReviewId {
    fn from(s: &str) -> Self {
        ReviewId::Text(s.to_string())
    }
}

/// A single customer review. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    /// Display name; empty when the sender never gave one.
    #[serde(deserialize_with = "null_as_empty")]
    pub user_name: String,
    pub product_name: String,
    pub product_review: String,
    /// Raw timestamp as received. Parsed lazily so a bad value only affects its cell.
    pub created_at: String,
    pub contact_number: String,
    /// Delivery status reported by the messaging channel, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Review {
    /// Parse `created_at` as a UTC instant.
    ///
    /// Returns `None` for anything that is neither RFC 3339 nor a naive
    /// ISO-8601 date-time.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

/// Parse an API timestamp. Naive values are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
        .map(|naive| naive.and_utc())
}

/// Decode a `GET /api/reviews` response body.
///
/// The body must be a JSON array and every element must carry all required
/// fields; any deviation fails the whole payload.
pub fn parse_reviews(body: &str) -> Result<Vec<Review>> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if !value.is_array() {
        return Err(Error::MalformedPayload(format!(
            "expected a JSON array, got {}",
            json_kind(&value)
        )));
    }
    Ok(serde_json::from_value(value)?)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Ids that occur more than once, each reported once in first-seen order.
pub fn duplicate_ids(reviews: &[Review]) -> Vec<ReviewId> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut dups = Vec::new();
    for review in reviews {
        if !seen.insert(&review.id) && reported.insert(&review.id) {
            dups.push(review.id.clone());
        }
    }
    dups
}

#[cfg(test)]
#[path = "review_tests.rs"]
mod tests;
