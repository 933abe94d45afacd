// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn member(username: &str, points: u64) -> Member {
    let mut m = Member::new(username, username.to_uppercase(), "X");
    m.total_points = points;
    m
}

#[test]
fn rank_sorts_by_points_then_username() {
    let roster = Roster::from_members(vec![
        member("carol", 3),
        member("bob", 7),
        member("alice", 3),
        member("dave", 0),
    ]);

    let order: Vec<_> = rank(&roster).into_iter().map(|m| m.username).collect();
    assert_eq!(order, vec!["bob", "alice", "carol", "dave"]);
}

#[test]
fn rank_does_not_depend_on_roster_order() {
    let a = Roster::from_members(vec![member("x", 1), member("y", 1)]);
    let b = Roster::from_members(vec![member("y", 1), member("x", 1)]);
    assert_eq!(rank(&a), rank(&b));
}

#[test]
fn export_numbers_rows_from_one() {
    let board = vec![member("bob", 7), member("alice", 3)];
    let rows = export(&board);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].rank, 1);
    assert_eq!(rows[0].username, "bob");
    assert_eq!(rows[1].rank, 2);
    assert_eq!(rows[1].first_name, "ALICE");
    assert_eq!(rows[1].cells()[7], "3");
}

#[test]
fn export_of_empty_leaderboard_is_empty() {
    assert!(export(&[]).is_empty());
}
