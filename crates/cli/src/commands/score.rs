// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Score command

use chrono::{NaiveDate, NaiveDateTime};
use clap::Args;
use serde::Serialize;
use std::fmt;
use tally_core::{InteractionKind, InteractionRecord, RawInteraction, ScoreDelta, ScoreOutcome};

use crate::context::Context;
use crate::error::CliError;
use crate::output;

#[derive(Args)]
pub struct ScoreArgs {
    /// Interaction type: likes, comments or tags
    pub kind: InteractionKind,

    /// Usernames as extracted from the post
    pub candidates: Vec<String>,

    /// Post URL or other reference
    #[arg(long, default_value = "")]
    pub post: String,

    /// Tag occurrence count (required for tags)
    #[arg(long)]
    pub occurrences: Option<u32>,

    /// Score a single operator-chosen username instead of the candidates
    #[arg(long)]
    pub manual: Option<String>,

    /// Date of the interaction (stamped at noon)
    #[arg(long, conflicts_with = "at")]
    pub date: Option<NaiveDate>,

    /// Exact timestamp of the interaction, e.g. 2024-03-01T18:30:00
    #[arg(long)]
    pub at: Option<NaiveDateTime>,
}

impl ScoreArgs {
    fn into_raw(self) -> RawInteraction {
        let mut raw = RawInteraction::new(self.kind, self.candidates).with_post(self.post);
        raw.occurrences = self.occurrences;
        raw.manual_username = self.manual;
        match (self.date, self.at) {
            (_, Some(at)) => raw.at(at),
            (Some(date), None) => raw.on(date),
            (None, None) => raw,
        }
    }
}

#[derive(Serialize)]
struct ScoreReport {
    record: InteractionRecord,
    deltas: ScoreDelta,
    unmatched: Vec<String>,
    total_points: u64,
}

impl From<ScoreOutcome> for ScoreReport {
    fn from(outcome: ScoreOutcome) -> Self {
        Self {
            total_points: outcome.deltas.total_points(),
            record: outcome.record,
            deltas: outcome.deltas,
            unmatched: outcome.unmatched,
        }
    }
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scored {}", self.record.kind)?;
        if !self.record.post_reference.is_empty() {
            write!(f, " on {}", self.record.post_reference)?;
        }
        writeln!(
            f,
            ": {} matched, +{} points",
            self.record.resolved_usernames.len(),
            self.total_points
        )?;

        for delta in &self.deltas.members {
            writeln!(f, "  {:<24} +{}", output::clip(&delta.username, 24), delta.points)?;
        }
        if !self.unmatched.is_empty() {
            writeln!(f, "Unmatched: {}", self.unmatched.join(", "))?;
        }
        Ok(())
    }
}

pub fn handle(ctx: &mut Context, args: ScoreArgs) -> anyhow::Result<()> {
    let outcome = ctx
        .tracker
        .score(args.into_raw())
        .map_err(CliError::from)?;
    ctx.save()?;

    output::print(&ScoreReport::from(outcome), ctx.format);
    Ok(())
}
