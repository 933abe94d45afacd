// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status, undo and reset commands

use clap::Args;
use serde::Serialize;
use std::fmt;
use tally_core::{Activity, InteractionRecord};

use crate::context::Context;
use crate::error::CliError;
use crate::output;

#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Confirm that all points and history should be discarded
    #[arg(long)]
    pub yes: bool,
}

#[derive(Serialize)]
struct StatusInfo<'a> {
    members: usize,
    interactions: usize,
    undo_available: usize,
    last_activity: Option<&'a Activity>,
}

impl fmt::Display for StatusInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Members:        {}", self.members)?;
        writeln!(f, "Interactions:   {}", self.interactions)?;
        writeln!(f, "Undo available: {}", self.undo_available)?;
        match self.last_activity {
            Some(a) => {
                write!(
                    f,
                    "Last activity:  {} {} ({} matched)",
                    a.at.format("%Y-%m-%d %H:%M"),
                    a.kind,
                    a.matched_count
                )?;
                if !a.post_reference.is_empty() {
                    write!(f, " {}", a.post_reference)?;
                }
                writeln!(f)
            }
            None => writeln!(f, "Last activity:  none"),
        }
    }
}

pub fn status(ctx: &Context) {
    let info = StatusInfo {
        members: ctx.tracker.roster().len(),
        interactions: ctx.tracker.log().len(),
        undo_available: ctx.tracker.undo_depth(),
        last_activity: ctx.tracker.last_activity(),
    };
    output::print(&info, ctx.format);
}

#[derive(Serialize)]
struct UndoReport {
    undone: InteractionRecord,
    remaining: usize,
}

impl fmt::Display for UndoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Undid {}", self.undone.kind)?;
        if !self.undone.post_reference.is_empty() {
            write!(f, " on {}", self.undone.post_reference)?;
        }
        writeln!(f, " ({} undo remaining)", self.remaining)
    }
}

pub fn undo(ctx: &mut Context) -> anyhow::Result<()> {
    let outcome = ctx.tracker.undo().map_err(CliError::from)?;
    ctx.save()?;

    let report = UndoReport {
        undone: outcome.record,
        remaining: outcome.remaining,
    };
    output::print(&report, ctx.format);
    Ok(())
}

pub fn reset(ctx: &mut Context, args: &ResetArgs) -> anyhow::Result<()> {
    if !args.yes {
        return Err(CliError::reset_unconfirmed().into());
    }

    ctx.tracker.reset();
    ctx.save()?;
    println!(
        "Reset points for {} members and cleared history",
        ctx.tracker.roster().len()
    );
    Ok(())
}
