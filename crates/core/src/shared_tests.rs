// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::clock::FakeClock;
use crate::interaction::InteractionKind;
use crate::settings::Settings;
use std::thread;

fn shared() -> SharedTracker<FakeClock> {
    let mut tracker = Tracker::new(Settings::default(), FakeClock::default());
    tracker.replace_roster(vec![Member::new("alice", "", ""), Member::new("bob", "", "")]);
    SharedTracker::new(tracker)
}

#[test]
fn readers_only_see_whole_operations() {
    let tracker = shared();

    let writer = {
        let tracker = tracker.clone();
        thread::spawn(move || {
            for _ in 0..50 {
                tracker
                    .score(RawInteraction::new(InteractionKind::Likes, ["alice", "bob"]))
                    .unwrap();
            }
        })
    };

    let reader = {
        let tracker = tracker.clone();
        thread::spawn(move || {
            for _ in 0..50 {
                let board = tracker.leaderboard(&DateRange::all());
                // alice and bob are always scored together
                assert_eq!(board[0].total_points, board[1].total_points);
            }
        })
    };

    writer.join().unwrap();
    reader.join().unwrap();

    let board = tracker.leaderboard(&DateRange::all());
    assert_eq!(board[0].likes, 50);
    assert_eq!(tracker.with(|t| t.log().len()), 50);
}

#[test]
fn undo_through_shared_handle() {
    let tracker = shared();
    assert_eq!(tracker.undo(), Err(TallyError::EmptyHistory));

    tracker
        .score(RawInteraction::new(InteractionKind::Likes, ["alice"]))
        .unwrap();
    assert_eq!(tracker.undo().unwrap().remaining, 0);
}
