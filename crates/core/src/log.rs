// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interaction log: the ordered history of scored events

use crate::interaction::{DateRange, InteractionRecord};
use serde::{Deserialize, Serialize};

/// Append/remove-only record of every scored interaction, in scoring order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InteractionLog {
    records: Vec<InteractionRecord>,
}

impl InteractionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<InteractionRecord>) -> Self {
        Self { records }
    }

    pub fn append(&mut self, record: InteractionRecord) {
        self.records.push(record);
    }

    /// Remove the most recent record equal to `record`.
    ///
    /// Returns false if no such record exists. Earlier identical records are
    /// left in place.
    pub fn remove(&mut self, record: &InteractionRecord) -> bool {
        match self.records.iter().rposition(|r| r == record) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Records whose date falls within the range, in log order
    pub fn filtered(&self, range: &DateRange) -> impl Iterator<Item = &InteractionRecord> {
        let range = *range;
        self.records.iter().filter(move |r| range.contains(r.date()))
    }

    pub fn records(&self) -> &[InteractionRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&InteractionRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
