// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! tally - club engagement points tracker

mod commands;
mod completions;
mod context;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{board, roster, score, status};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::context::Context;
use crate::error::CliError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "tally - Score club social-media engagement into a leaderboard"
)]
struct Cli {
    /// Directory holding the roster, history and settings
    #[arg(long, global = true, env = "TALLY_DATA_DIR", default_value = ".tally")]
    data_dir: PathBuf,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roster management
    Roster(roster::RosterArgs),
    /// Score one interaction (likes, comments or tags)
    Score(score::ScoreArgs),
    /// Undo the most recent scoring operation
    Undo,
    /// Show the leaderboard
    Leaderboard(board::RangeArgs),
    /// Export the leaderboard as CSV
    Export(board::ExportArgs),
    /// List scored interactions
    History(board::RangeArgs),
    /// Show roster size, history size, undo depth and last activity
    Status,
    /// Zero all points and clear history
    Reset(status::ResetArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<CliError>() {
                Some(cli_error) => eprint!("{}", cli_error),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Commands::Completions(args) = cli.command {
        completions::generate_completions::<Cli>(args.shell);
        return Ok(());
    }

    let mut ctx = Context::open(&cli.data_dir, cli.format)?;

    match cli.command {
        Commands::Roster(args) => roster::handle(&mut ctx, args.command)?,
        Commands::Score(args) => score::handle(&mut ctx, args)?,
        Commands::Undo => status::undo(&mut ctx)?,
        Commands::Leaderboard(range) => board::leaderboard(&ctx, &range)?,
        Commands::Export(args) => board::export(&ctx, &args)?,
        Commands::History(range) => board::history(&ctx, &range)?,
        Commands::Status => status::status(&ctx),
        Commands::Reset(args) => status::reset(&mut ctx, &args)?,
        // Handled before the data directory is opened
        Commands::Completions(_) => {}
    }

    Ok(())
}
