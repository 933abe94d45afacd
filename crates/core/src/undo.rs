// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot-based undo of recent scoring operations
//!
//! Each entry pairs the full roster as it was before a scoring call with the
//! record that call logged. Restoring the snapshot, rather than reversing
//! deltas, keeps capped comment points exact.

use crate::interaction::InteractionRecord;
use crate::roster::Roster;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of reversible scoring operations
pub const UNDO_CAPACITY: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoEntry {
    pub roster_before: Roster,
    pub record: InteractionRecord,
}

/// Bounded LIFO of undo entries; the oldest entry is dropped on overflow
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UndoStack {
    entries: VecDeque<UndoEntry>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a snapshot taken before `record` was scored
    pub fn record(&mut self, roster_before: Roster, record: InteractionRecord) {
        self.entries.push_back(UndoEntry {
            roster_before,
            record,
        });
        while self.entries.len() > UNDO_CAPACITY {
            self.entries.pop_front();
        }
    }

    pub fn pop(&mut self) -> Option<UndoEntry> {
        self.entries.pop_back()
    }

    pub fn peek(&self) -> Option<&UndoEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
#[path = "undo_tests.rs"]
mod tests;
