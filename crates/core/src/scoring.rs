// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scoring rules and history recomputation
//!
//! Each interaction kind aggregates its resolved usernames differently:
//! - likes: one like and one like-value per unique member
//! - comments: the raw occurrence count goes to `comments`, but only
//!   `min(count, comment_cap)` occurrences earn points
//! - tags: each unique member earns the event's tag occurrence count
//!
//! Incremental scoring and replay share [`apply`], so replaying a slice of
//! the log reproduces exactly the counters incremental scoring produced.

use crate::error::TallyError;
use crate::interaction::{DateRange, InteractionKind, InteractionRecord};
use crate::log::InteractionLog;
use crate::roster::{Member, Roster};
use crate::settings::PointRules;
use serde::Serialize;

/// Counter changes applied to one member
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MemberDelta {
    pub username: String,
    pub likes: u64,
    pub comments: u64,
    pub tags: u64,
    pub points: u64,
}

/// Net per-member changes from one scoring call, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScoreDelta {
    pub members: Vec<MemberDelta>,
}

impl ScoreDelta {
    pub fn total_points(&self) -> u64 {
        self.members.iter().map(|m| m.points).sum()
    }

    pub fn get(&self, username: &str) -> Option<&MemberDelta> {
        self.members.iter().find(|m| m.username == username)
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Occurrence count per username, in first-seen order
fn occurrence_counts(usernames: &[String]) -> Vec<(&str, u64)> {
    let mut counts: Vec<(&str, u64)> = Vec::new();
    for username in usernames {
        match counts.iter_mut().find(|(u, _)| *u == username.as_str()) {
            Some((_, n)) => *n += 1,
            None => counts.push((username.as_str(), 1)),
        }
    }
    counts
}

/// Delta one member earns for `count` appearances in a single event
fn member_delta(
    rules: &PointRules,
    kind: InteractionKind,
    username: &str,
    count: u64,
    tag_occurrences: u32,
) -> Result<MemberDelta, TallyError> {
    let mut delta = MemberDelta {
        username: username.to_string(),
        ..MemberDelta::default()
    };
    let earning = match kind {
        InteractionKind::Likes => {
            delta.likes = 1;
            1
        }
        InteractionKind::Comments => {
            delta.comments = count;
            count.min(rules.comment_cap)
        }
        InteractionKind::Tags => {
            delta.tags = u64::from(tag_occurrences);
            delta.tags
        }
    };
    delta.points = earning
        .checked_mul(rules.value(kind))
        .ok_or_else(|| TallyError::CounterOverflow(username.to_string()))?;
    Ok(delta)
}

/// Member counters after adding `change`, or `None` on overflow
fn add_counters(member: &Member, change: &MemberDelta) -> Option<Member> {
    Some(Member {
        likes: member.likes.checked_add(change.likes)?,
        comments: member.comments.checked_add(change.comments)?,
        tags: member.tags.checked_add(change.tags)?,
        total_points: member.total_points.checked_add(change.points)?,
        ..member.clone()
    })
}

/// Apply one event's point rules to the roster.
///
/// Every username must already be on the roster and no counter may
/// overflow; otherwise nothing is changed and the error is returned.
pub fn apply(
    roster: &mut Roster,
    rules: &PointRules,
    kind: InteractionKind,
    usernames: &[String],
    tag_occurrences: u32,
) -> Result<ScoreDelta, TallyError> {
    let mut delta = ScoreDelta::default();
    let mut updated = Vec::new();
    for (username, count) in occurrence_counts(usernames) {
        let member = roster
            .get(username)
            .ok_or_else(|| TallyError::UnknownMemberReference(username.to_string()))?;
        let change = member_delta(rules, kind, username, count, tag_occurrences)?;
        let next = add_counters(member, &change)
            .ok_or_else(|| TallyError::CounterOverflow(username.to_string()))?;
        updated.push(next);
        delta.members.push(change);
    }

    for next in updated {
        if let Some(member) = roster.get_mut(&next.username) {
            *member = next;
        }
    }
    Ok(delta)
}

/// Replay a logged record, skipping members no longer on the roster
fn replay(roster: &mut Roster, rules: &PointRules, record: &InteractionRecord) {
    let known: Vec<String> = record
        .resolved_usernames
        .iter()
        .filter(|u| roster.contains(u))
        .cloned()
        .collect();
    if known.len() < record.resolved_usernames.len() {
        tracing::debug!(
            post = %record.post_reference,
            skipped = record.resolved_usernames.len() - known.len(),
            "replaying record with departed members"
        );
    }
    if let Err(e) = apply(roster, rules, record.kind, &known, record.occurrences) {
        tracing::warn!(post = %record.post_reference, error = %e, "skipped record during replay");
    }
}

/// Rebuild roster counters from the log entries within `range`.
///
/// With no bounds the current counters are returned as-is. Otherwise every
/// counter starts at zero and matching records are replayed in log order.
/// Neither the log nor the given roster is modified.
pub fn recompute(
    roster: &Roster,
    log: &InteractionLog,
    range: &DateRange,
    rules: &PointRules,
) -> Roster {
    let mut rebuilt = roster.clone();
    if range.is_unbounded() {
        return rebuilt;
    }

    rebuilt.reset_counters();
    let mut replayed = 0usize;
    for record in log.filtered(range) {
        replay(&mut rebuilt, rules, record);
        replayed += 1;
    }
    tracing::debug!(
        start = ?range.start,
        end = ?range.end,
        replayed,
        "recomputed roster from history"
    );
    rebuilt
}

#[cfg(test)]
#[path = "scoring_tests.rs"]
mod tests;
