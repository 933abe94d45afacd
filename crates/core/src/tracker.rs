// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker: the single mutation entry point over roster, log and undo stack
//!
//! Data flow for one scoring call:
//! raw interaction -> resolver -> roster snapshot -> point rules ->
//! roster mutation + log append -> undo entry.

use crate::clock::{Clock, SystemClock};
use crate::error::TallyError;
use crate::interaction::{DateRange, InteractionKind, InteractionRecord, RawInteraction};
use crate::leaderboard::{self, ExportRow};
use crate::log::InteractionLog;
use crate::resolver::{normalize, Resolver};
use crate::roster::{Member, Roster};
use crate::scoring::{self, ScoreDelta};
use crate::settings::Settings;
use crate::undo::UndoStack;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Summary of the most recent scoring call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub at: NaiveDateTime,
    pub post_reference: String,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    pub matched_count: usize,
}

/// Everything the tracker owns that outlives a single call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerState {
    pub roster: Roster,
    pub log: InteractionLog,
    pub undo: UndoStack,
    pub last_activity: Option<Activity>,
}

/// Result of a successful scoring call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreOutcome {
    pub record: InteractionRecord,
    pub deltas: ScoreDelta,
    /// Normalized candidates that matched no member
    pub unmatched: Vec<String>,
}

/// Result of a successful undo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoOutcome {
    /// The record that was removed from the log
    pub record: InteractionRecord,
    /// Undo entries still available
    pub remaining: usize,
}

/// Engagement tracker for one club roster.
///
/// All methods that mutate take `&mut self`; callers sharing a tracker
/// across threads go through [`crate::SharedTracker`].
pub struct Tracker<C: Clock = SystemClock> {
    state: TrackerState,
    settings: Settings,
    clock: C,
}

impl<C: Clock> Tracker<C> {
    pub fn new(settings: Settings, clock: C) -> Self {
        Self::with_state(TrackerState::default(), settings, clock)
    }

    /// Resume from previously persisted state
    pub fn with_state(state: TrackerState, settings: Settings, clock: C) -> Self {
        Self {
            state,
            settings,
            clock,
        }
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn into_state(self) -> TrackerState {
        self.state
    }

    pub fn roster(&self) -> &Roster {
        &self.state.roster
    }

    pub fn log(&self) -> &InteractionLog {
        &self.state.log
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn last_activity(&self) -> Option<&Activity> {
        self.state.last_activity.as_ref()
    }

    /// Number of scoring calls that can currently be undone
    pub fn undo_depth(&self) -> usize {
        self.state.undo.len()
    }

    /// Resolve, score and log one raw interaction.
    ///
    /// An event whose candidates all fail to resolve is still logged with an
    /// empty username list.
    pub fn score(&mut self, raw: RawInteraction) -> Result<ScoreOutcome, TallyError> {
        let (kind, occurrences) = raw.validate()?;

        let resolver = Resolver::new(&self.state.roster, self.settings.threshold);
        let mut matched = Vec::new();
        let mut unmatched = Vec::new();
        for candidate in raw.effective_candidates() {
            match resolver.resolve(candidate) {
                Some(resolution) => matched.push(resolution.username),
                None => unmatched.push(normalize(candidate)),
            }
        }

        let roster_before = self.state.roster.clone();
        let deltas = scoring::apply(
            &mut self.state.roster,
            &self.settings.rules,
            kind,
            &matched,
            occurrences,
        )?;

        let now = self.clock.now();
        let record = InteractionRecord {
            timestamp: raw.timestamp.unwrap_or(now),
            post_reference: raw.post_reference,
            kind,
            resolved_usernames: matched,
            occurrences,
        };
        self.state.log.append(record.clone());
        self.state.undo.record(roster_before, record.clone());
        self.state.last_activity = Some(Activity {
            at: now,
            post_reference: record.post_reference.clone(),
            kind,
            matched_count: record.resolved_usernames.len(),
        });

        tracing::info!(
            %kind,
            post = %record.post_reference,
            matched = record.resolved_usernames.len(),
            unmatched = unmatched.len(),
            points = deltas.total_points(),
            "scored interaction"
        );
        if record.resolved_usernames.is_empty() {
            tracing::warn!(%kind, post = %record.post_reference, "no candidates matched the roster");
        }

        Ok(ScoreOutcome {
            record,
            deltas,
            unmatched,
        })
    }

    /// Reverse the most recent scoring call.
    ///
    /// The roster is replaced wholesale by the snapshot taken before that
    /// call, and its record is removed from the log.
    pub fn undo(&mut self) -> Result<UndoOutcome, TallyError> {
        let entry = self.state.undo.pop().ok_or(TallyError::EmptyHistory)?;

        self.state.roster = entry.roster_before;
        if !self.state.log.remove(&entry.record) {
            tracing::warn!(post = %entry.record.post_reference, "undone record was not in the log");
        }

        let remaining = self.state.undo.len();
        tracing::info!(
            kind = %entry.record.kind,
            post = %entry.record.post_reference,
            remaining,
            "undid interaction"
        );
        Ok(UndoOutcome {
            record: entry.record,
            remaining,
        })
    }

    /// Roster counters rebuilt from the log entries within `range`
    pub fn recompute(&self, range: &DateRange) -> Roster {
        scoring::recompute(
            &self.state.roster,
            &self.state.log,
            range,
            &self.settings.rules,
        )
    }

    /// Members ranked by points for the given date range
    pub fn leaderboard(&self, range: &DateRange) -> Vec<Member> {
        leaderboard::rank(&self.recompute(range))
    }

    pub fn export(&self, range: &DateRange) -> Vec<ExportRow> {
        leaderboard::export(&self.leaderboard(range))
    }

    /// Logged records within `range`, in log order
    pub fn history(&self, range: &DateRange) -> Vec<&InteractionRecord> {
        self.state.log.filtered(range).collect()
    }

    /// Zero all counters and clear the log. Cannot be undone.
    pub fn reset(&mut self) {
        self.state.roster.reset_counters();
        self.state.log.clear();
        self.state.undo.clear();
        tracing::info!(members = self.state.roster.len(), "reset all points");
    }

    pub fn add_member(&mut self, member: Member) -> Result<(), TallyError> {
        let username = member.username.clone();
        self.state.roster.add(member)?;
        self.roster_changed();
        tracing::info!(username = %normalize(&username), "added member");
        Ok(())
    }

    pub fn remove_member(&mut self, username: &str) -> Result<Member, TallyError> {
        let removed = self.state.roster.remove(username)?;
        self.roster_changed();
        tracing::info!(username = %removed.username, "removed member");
        Ok(removed)
    }

    /// Replace the whole roster (bulk upload). Returns the new member count.
    pub fn replace_roster(&mut self, members: Vec<Member>) -> usize {
        self.state.roster = Roster::from_members(members);
        self.roster_changed();
        tracing::info!(members = self.state.roster.len(), "replaced roster");
        self.state.roster.len()
    }

    /// Older snapshots no longer describe the current membership
    fn roster_changed(&mut self) {
        if !self.state.undo.is_empty() {
            tracing::debug!(dropped = self.state.undo.len(), "clearing undo history");
            self.state.undo.clear();
        }
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
