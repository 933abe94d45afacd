// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Leaderboard, export and history commands

use anyhow::Context as _;
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tally_core::{DateRange, ExportRow, InteractionRecord};

use crate::context::Context;
use crate::output;

#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// First day to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

impl RangeArgs {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.from, self.to)
    }
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Write CSV to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Serialize)]
#[serde(transparent)]
struct Board {
    rows: Vec<ExportRow>,
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "No members on the roster.");
        }
        writeln!(
            f,
            "{:>4}  {:<24} {:<28} {:>6} {:>8} {:>5} {:>6}",
            "RANK", "USERNAME", "NAME", "LIKES", "COMMENTS", "TAGS", "POINTS"
        )?;
        for row in &self.rows {
            let name = format!("{} {}", row.first_name, row.last_name);
            writeln!(
                f,
                "{:>4}  {:<24} {:<28} {:>6} {:>8} {:>5} {:>6}",
                row.rank,
                output::clip(&row.username, 24),
                output::clip(name.trim(), 28),
                row.likes,
                row.comments,
                row.tags,
                row.total_points
            )?;
        }
        Ok(())
    }
}

pub fn leaderboard(ctx: &Context, range: &RangeArgs) -> anyhow::Result<()> {
    let board = Board {
        rows: ctx.tracker.export(&range.range()),
    };
    output::print(&board, ctx.format);
    Ok(())
}

pub fn export(ctx: &Context, args: &ExportArgs) -> anyhow::Result<()> {
    let rows = ctx.tracker.export(&args.range.range());

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            output::write_csv(&mut out, &rows)?;
            out.flush()?;
            tracing::info!(path = %path.display(), rows = rows.len(), "exported leaderboard");
            println!("Exported {} rows to {}", rows.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            output::write_csv(&mut out, &rows)?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(transparent)]
struct History<'a> {
    records: Vec<&'a InteractionRecord>,
}

impl fmt::Display for History<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return writeln!(f, "No interactions recorded.");
        }
        for record in &self.records {
            write!(
                f,
                "{}  {:<8}",
                record.timestamp.format("%Y-%m-%d %H:%M"),
                record.kind.as_str()
            )?;
            if record.occurrences > 1 {
                write!(f, " x{}", record.occurrences)?;
            }
            if !record.post_reference.is_empty() {
                write!(f, " {}", record.post_reference)?;
            }
            writeln!(f, " [{}]", record.resolved_usernames.join(", "))?;
        }
        Ok(())
    }
}

pub fn history(ctx: &Context, range: &RangeArgs) -> anyhow::Result<()> {
    let history = History {
        records: ctx.tracker.history(&range.range()),
    };
    output::print(&history, ctx.format);
    Ok(())
}
