// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::interaction::InteractionKind;
use chrono::NaiveDate;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, day).unwrap()
}

fn record(day: u32, post: &str) -> InteractionRecord {
    InteractionRecord {
        timestamp: date(day).and_hms_opt(12, 0, 0).unwrap(),
        post_reference: post.to_string(),
        kind: InteractionKind::Likes,
        resolved_usernames: vec!["alice".to_string()],
        occurrences: 1,
    }
}

#[test]
fn append_keeps_order() {
    let mut log = InteractionLog::new();
    log.append(record(2, "b"));
    log.append(record(1, "a"));

    let posts: Vec<_> = log.records().iter().map(|r| r.post_reference.as_str()).collect();
    assert_eq!(posts, vec!["b", "a"]);
    assert_eq!(log.last().unwrap().post_reference, "a");
}

#[test]
fn remove_takes_most_recent_equal_record() {
    let mut log = InteractionLog::new();
    log.append(record(1, "a"));
    log.append(record(2, "b"));
    log.append(record(1, "a"));

    assert!(log.remove(&record(1, "a")));
    assert_eq!(log.len(), 2);
    assert_eq!(log.records()[0], record(1, "a"));
    assert_eq!(log.records()[1], record(2, "b"));
}

#[test]
fn remove_missing_record_is_noop() {
    let mut log = InteractionLog::from_records(vec![record(1, "a")]);
    assert!(!log.remove(&record(9, "z")));
    assert_eq!(log.len(), 1);
}

#[test]
fn filtered_respects_inclusive_bounds() {
    let log = InteractionLog::from_records(vec![
        record(1, "a"),
        record(5, "b"),
        record(10, "c"),
        record(11, "d"),
    ]);
    let range = DateRange::new(Some(date(5)), Some(date(10)));

    let posts: Vec<_> = log.filtered(&range).map(|r| r.post_reference.as_str()).collect();
    assert_eq!(posts, vec!["b", "c"]);
}

/// Matching records borrow only the log, so they outlive the range
fn records_since<'a>(log: &'a InteractionLog, day: u32) -> Vec<&'a InteractionRecord> {
    let range = DateRange::new(Some(date(day)), None);
    log.filtered(&range).collect()
}

#[test]
fn filtered_records_outlive_range() {
    let log = InteractionLog::from_records(vec![record(1, "a"), record(7, "b")]);

    let recent = records_since(&log, 5);
    assert_eq!(recent, vec![&record(7, "b")]);
}

#[test]
fn clear_empties_log() {
    let mut log = InteractionLog::from_records(vec![record(1, "a")]);
    log.clear();
    assert!(log.is_empty());
}
