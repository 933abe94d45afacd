// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Thread-safe handle for sharing one tracker between readers and a writer
//!
//! Each call holds a single lock over roster, log and undo stack together,
//! so a reader never observes a half-applied score or undo. Reads return
//! owned copies.

use crate::clock::{Clock, SystemClock};
use crate::error::TallyError;
use crate::interaction::{DateRange, RawInteraction};
use crate::roster::Member;
use crate::tracker::{ScoreOutcome, Tracker, UndoOutcome};
use std::sync::{Arc, Mutex};

pub struct SharedTracker<C: Clock = SystemClock> {
    inner: Arc<Mutex<Tracker<C>>>,
}

impl<C: Clock> Clone for SharedTracker<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Clock> SharedTracker<C> {
    pub fn new(tracker: Tracker<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tracker)),
        }
    }

    /// Run `f` with exclusive access to the tracker
    pub fn with<R>(&self, f: impl FnOnce(&mut Tracker<C>) -> R) -> R {
        let mut tracker = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut tracker)
    }

    pub fn score(&self, raw: RawInteraction) -> Result<ScoreOutcome, TallyError> {
        self.with(|t| t.score(raw))
    }

    pub fn undo(&self) -> Result<UndoOutcome, TallyError> {
        self.with(|t| t.undo())
    }

    pub fn leaderboard(&self, range: &DateRange) -> Vec<Member> {
        self.with(|t| t.leaderboard(range))
    }
}

#[cfg(test)]
#[path = "shared_tests.rs"]
mod tests;
