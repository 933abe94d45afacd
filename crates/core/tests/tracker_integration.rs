// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Integration tests for the Tracker
//!
//! Drives the public API the way an extractor front end does: raw JSON
//! events in, leaderboards and export rows out.

use chrono::NaiveDate;
use tally_core::{
    DateRange, FakeClock, InteractionKind, Member, RawInteraction, Settings, SharedTracker,
    TallyError, Tracker,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
}

fn club() -> Tracker<FakeClock> {
    let clock = FakeClock::at(day(1).and_hms_opt(8, 0, 0).unwrap());
    let mut tracker = Tracker::new(Settings::default(), clock);
    tracker.replace_roster(vec![
        Member::new("maya.rivers", "Maya", "Rivers"),
        Member::new("theo_k", "Theo", "Kim"),
        Member::new("sam", "Sam", ""),
    ]);
    tracker
}

fn raw(json: &str) -> RawInteraction {
    serde_json::from_str(json).unwrap()
}

#[test]
fn extractor_payloads_score_end_to_end() {
    let mut tracker = club();

    tracker
        .score(raw(r#"{
            "type": "likers",
            "postUrl": "https://example.com/p/1",
            "candidates": ["Maya.Rivers", "@theo_k", "random_fan"],
            "timestamp": "2025-03-02T10:00:00"
        }"#))
        .unwrap();
    tracker
        .score(raw(r#"{
            "type": "commenters",
            "postUrl": "https://example.com/p/1",
            "candidates": ["theo_k", "theo_k", "theo_k", "theo_k", "theo_k", "maya.rivrs"],
            "timestamp": "2025-03-02T11:00:00"
        }"#))
        .unwrap();
    tracker
        .score(raw(r#"{
            "type": "tagged_users",
            "postUrl": "https://example.com/p/2",
            "candidates": ["sam"],
            "occurrences": 3,
            "timestamp": "2025-03-09T09:00:00"
        }"#))
        .unwrap();

    let rows = tracker.export(&DateRange::all());
    let summary: Vec<(&str, u64, u64, u64, u64)> = rows
        .iter()
        .map(|r| (r.username.as_str(), r.likes, r.comments, r.tags, r.total_points))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("sam", 0, 0, 3, 15),
            ("theo_k", 1, 5, 0, 5),
            ("maya.rivers", 1, 1, 0, 2),
        ]
    );
    assert_eq!(rows[0].rank, 1);
    assert_eq!(rows[2].rank, 3);
}

#[test]
fn weekly_leaderboard_ignores_other_weeks() {
    let mut tracker = club();
    tracker
        .score(RawInteraction::new(InteractionKind::Likes, ["sam"]).on(day(2)))
        .unwrap();
    tracker
        .score(
            RawInteraction::new(InteractionKind::Tags, ["theo_k"])
                .with_occurrences(1)
                .on(day(10)),
        )
        .unwrap();

    let week_one = tracker.leaderboard(&DateRange::new(Some(day(1)), Some(day(7))));
    assert_eq!(week_one[0].username, "sam");
    assert_eq!(week_one[0].total_points, 1);
    assert_eq!(week_one[1].total_points, 0);

    let all_time = tracker.leaderboard(&DateRange::all());
    assert_eq!(all_time[0].username, "theo_k");
    assert_eq!(all_time[0].total_points, 5);
}

#[test]
fn malformed_payload_changes_nothing() {
    let mut tracker = club();
    let before = tracker.state().clone();

    let err = tracker
        .score(raw(r#"{"type": "tags", "candidates": ["sam"]}"#))
        .unwrap_err();
    assert!(matches!(err, TallyError::MalformedInteraction(_)));

    let err = tracker.score(raw(r#"{"candidates": ["sam"]}"#)).unwrap_err();
    assert!(matches!(err, TallyError::MalformedInteraction(_)));

    assert_eq!(tracker.state(), &before);
}

#[test]
fn shared_tracker_serializes_scoring_across_threads() {
    let shared = SharedTracker::new(club());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            std::thread::spawn(move || {
                for _ in 0..5 {
                    shared
                        .score(RawInteraction::new(InteractionKind::Likes, ["maya.rivers"]))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let board = shared.leaderboard(&DateRange::all());
    assert_eq!(board[0].username, "maya.rivers");
    assert_eq!(board[0].likes, 20);
    assert_eq!(shared.with(|t| t.log().len()), 20);
}
