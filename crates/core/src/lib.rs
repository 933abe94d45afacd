// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! tally-core: engagement resolution and scoring engine
//!
//! This crate provides:
//! - The roster of club members and their accumulated counters
//! - Exact-then-fuzzy username resolution against the roster
//! - Point rules with a per-post comment cap
//! - An ordered interaction log with date-filtered recomputation
//! - Snapshot-based undo of recent scoring operations

pub mod clock;
pub mod error;
pub mod interaction;
pub mod leaderboard;
pub mod log;
pub mod resolver;
pub mod roster;
pub mod scoring;
pub mod settings;
pub mod shared;
pub mod tracker;
pub mod undo;

pub use clock::{Clock, FakeClock, SystemClock};
pub use error::TallyError;
pub use interaction::{DateRange, InteractionKind, InteractionRecord, RawInteraction};
pub use leaderboard::{export, rank, ExportRow};
pub use log::InteractionLog;
pub use resolver::{normalize, Resolution, Resolver};
pub use roster::{Member, Roster};
pub use scoring::{recompute, MemberDelta, ScoreDelta};
pub use settings::{PointRules, Settings};
pub use shared::SharedTracker;
pub use tracker::{Activity, ScoreOutcome, Tracker, TrackerState, UndoOutcome};
pub use undo::{UndoEntry, UndoStack, UNDO_CAPACITY};
