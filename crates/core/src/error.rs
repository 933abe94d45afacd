// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the scoring engine

use thiserror::Error;

/// Errors surfaced by roster, scoring and undo operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TallyError {
    #[error("nothing to undo")]
    EmptyHistory,
    #[error("malformed interaction: {0}")]
    MalformedInteraction(String),
    /// A username reached the scoring rules without being on the roster.
    /// Resolver output is always checked against the live roster, so this
    /// indicates a caller bypassed resolution.
    #[error("unknown member reference: {0}")]
    UnknownMemberReference(String),
    #[error("invalid member: {0}")]
    InvalidMember(String),
    #[error("member already on roster: {0}")]
    DuplicateMember(String),
    #[error("member not found: {0}")]
    MemberNotFound(String),
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
    /// Applying an event would push a counter past `u64::MAX`
    #[error("counter overflow for {0}")]
    CounterOverflow(String),
}
