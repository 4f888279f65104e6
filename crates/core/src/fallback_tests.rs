// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::review::duplicate_ids;
use chrono::TimeZone;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 12, 30, 0).unwrap()
}

#[test]
fn three_samples_in_fixed_order() {
    let reviews = fallback_reviews(fixed_now());
    let names: Vec<_> = reviews.iter().map(|r| r.user_name.as_str()).collect();
    assert_eq!(names, vec!["Aditi", "Rahul", "Sarah"]);
    let products: Vec<_> = reviews.iter().map(|r| r.product_name.as_str()).collect();
    assert_eq!(
        products,
        vec!["iPhone 15", "Sony WH-1000XM5", "MacBook Air M2"]
    );
}

#[test]
fn ids_are_distinct() {
    let reviews = fallback_reviews(fixed_now());
    assert!(duplicate_ids(&reviews).is_empty());
    let ids: Vec<_> = reviews.iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, vec![ReviewId::Int(1), ReviewId::Int(2), ReviewId::Int(3)]);
}

#[test]
fn timestamps_step_back_one_day() {
    let now = fixed_now();
    let reviews = fallback_reviews(now);
    assert_eq!(reviews[0].created_at, "2024-03-10T12:30:00.000Z");
    assert_eq!(reviews[0].created_at_utc().unwrap(), now);
    assert_eq!(
        reviews[1].created_at_utc().unwrap(),
        now - Duration::days(1)
    );
    assert_eq!(
        reviews[2].created_at_utc().unwrap(),
        now - Duration::days(2)
    );
}

#[test]
fn same_instant_yields_identical_set() {
    assert_eq!(fallback_reviews(fixed_now()), fallback_reviews(fixed_now()));
}

#[test]
fn contents_do_not_depend_on_time() {
    let a = fallback_reviews(fixed_now());
    let b = fallback_reviews(fixed_now() + Duration::hours(5));
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.id, y.id);
        assert_eq!(x.product_review, y.product_review);
        assert_eq!(x.contact_number, y.contact_number);
        assert_ne!(x.created_at, y.created_at);
    }
}

#[test]
fn contact_numbers_are_sample_range() {
    for review in fallback_reviews(fixed_now()) {
        assert!(review.contact_number.starts_with("+1415555010"));
    }
}

#[test]
fn message_text() {
    assert_eq!(
        FALLBACK_MESSAGE,
        "Could not fetch reviews. Ensure the backend is running."
    );
}
