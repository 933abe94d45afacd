// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Leaderboard ordering and tabular export

use crate::roster::{Member, Roster};
use serde::{Deserialize, Serialize};

/// Members sorted by total points, highest first; ties by username ascending
pub fn rank(roster: &Roster) -> Vec<Member> {
    let mut members = roster.members().to_vec();
    members.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.username.cmp(&b.username))
    });
    members
}

/// One leaderboard row for downstream file writers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub rank: usize,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub likes: u64,
    pub comments: u64,
    pub tags: u64,
    pub total_points: u64,
}

impl ExportRow {
    pub const HEADERS: [&'static str; 8] = [
        "Rank",
        "First Name",
        "Last Name",
        "Username",
        "Likes",
        "Comments",
        "Tags",
        "Total Points",
    ];

    /// Cell values in [`ExportRow::HEADERS`] order
    pub fn cells(&self) -> [String; 8] {
        [
            self.rank.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.username.clone(),
            self.likes.to_string(),
            self.comments.to_string(),
            self.tags.to_string(),
            self.total_points.to_string(),
        ]
    }
}

/// Number an ordered leaderboard from rank 1
pub fn export(leaderboard: &[Member]) -> Vec<ExportRow> {
    leaderboard
        .iter()
        .enumerate()
        .map(|(i, m)| ExportRow {
            rank: i + 1,
            first_name: m.first_name.clone(),
            last_name: m.last_name.clone(),
            username: m.username.clone(),
            likes: m.likes,
            comments: m.comments,
            tags: m.tags,
            total_points: m.total_points,
        })
        .collect()
}

#[cfg(test)]
#[path = "leaderboard_tests.rs"]
mod tests;
