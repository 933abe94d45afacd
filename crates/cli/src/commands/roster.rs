// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Roster commands

use anyhow::Context as _;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tally_core::Member;

use crate::context::Context;
use crate::error::CliError;
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct RosterArgs {
    #[command(subcommand)]
    pub command: RosterCommand,
}

#[derive(Subcommand)]
pub enum RosterCommand {
    /// List members with their counters
    List,
    /// Add a member
    Add {
        /// Username (case and a leading @ are ignored)
        username: String,
        /// First name
        #[arg(long, default_value = "")]
        first: String,
        /// Last name
        #[arg(long, default_value = "")]
        last: String,
    },
    /// Remove a member
    Remove {
        /// Username to remove
        username: String,
    },
    /// Replace the roster from a JSON array of members
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },
}

#[derive(Serialize)]
struct RosterListing<'a> {
    members: &'a [Member],
}

impl fmt::Display for RosterListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.members.is_empty() {
            return writeln!(f, "Roster is empty.");
        }
        writeln!(
            f,
            "{:<24} {:<28} {:>6} {:>8} {:>5} {:>6}",
            "USERNAME", "NAME", "LIKES", "COMMENTS", "TAGS", "POINTS"
        )?;
        for m in self.members {
            writeln!(
                f,
                "{:<24} {:<28} {:>6} {:>8} {:>5} {:>6}",
                output::clip(&m.username, 24),
                output::clip(&m.display_name(), 28),
                m.likes,
                m.comments,
                m.tags,
                m.total_points
            )?;
        }
        Ok(())
    }
}

pub fn handle(ctx: &mut Context, command: RosterCommand) -> anyhow::Result<()> {
    match command {
        RosterCommand::List => {
            let listing = RosterListing {
                members: ctx.tracker.roster().members(),
            };
            match ctx.format {
                OutputFormat::Text => print!("{}", listing),
                OutputFormat::Json => output::print_json(listing.members),
            }
            Ok(())
        }
        RosterCommand::Add {
            username,
            first,
            last,
        } => {
            let member = Member::new(&username, first, last);
            let canonical = member.username.clone();
            ctx.tracker.add_member(member).map_err(CliError::from)?;
            ctx.save()?;
            println!("Added '{}' to the roster", canonical);
            Ok(())
        }
        RosterCommand::Remove { username } => {
            let removed = ctx
                .tracker
                .remove_member(&username)
                .map_err(CliError::from)?;
            ctx.save()?;
            println!("Removed '{}' from the roster", removed.username);
            Ok(())
        }
        RosterCommand::Import { file } => import(ctx, &file),
    }
}

fn import(ctx: &mut Context, file: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let members: Vec<Member> = serde_json::from_str(&content).map_err(|e| {
        CliError::new(format!("Invalid roster file '{}'", file.display()))
            .with_context("Expected a JSON array of members")
            .with_suggestion(
                r#"Each entry needs a username: [{"username": "ann", "first_name": "Ann"}]"#,
            )
            .with_source(e)
    })?;

    let count = ctx.tracker.replace_roster(members);
    ctx.save()?;
    println!("Imported {} members", count);
    Ok(())
}
