// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Each error carries:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use std::fmt;
use std::path::Path;
use tally_core::{TallyError, UNDO_CAPACITY};

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct CliError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CliError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error that caused this error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Common error builders for typical failure scenarios.
impl CliError {
    /// Error for when another process holds the data directory.
    pub fn data_dir_locked(dir: &Path) -> Self {
        CliError::new(format!("Data directory '{}' is in use", dir.display()))
            .with_context("Another tally command is still running against it")
            .with_suggestion("Wait for the other command to finish and retry")
    }

    /// Error for an undo with nothing recorded.
    pub fn nothing_to_undo() -> Self {
        CliError::new("Nothing to undo")
            .with_context(format!(
                "Only the last {} scoring operations can be undone",
                UNDO_CAPACITY
            ))
            .with_context("Roster edits and resets clear undo history")
            .with_suggestion("Review scored interactions: tally history")
    }

    /// Error for a reset without confirmation.
    pub fn reset_unconfirmed() -> Self {
        CliError::new("Refusing to reset without confirmation")
            .with_context("Reset zeroes every member's points and deletes all history")
            .with_context("A reset cannot be undone")
            .with_suggestion("Export first: tally export --output backup.csv")
            .with_suggestion("Then confirm: tally reset --yes")
    }
}

impl From<TallyError> for CliError {
    fn from(err: TallyError) -> Self {
        let base = CliError::new(err.to_string());
        let hinted = match &err {
            TallyError::EmptyHistory => return CliError::nothing_to_undo(),
            TallyError::MalformedInteraction(_) => base
                .with_suggestion("Tag events need an explicit count: tally score tags <user> --occurrences N")
                .with_suggestion("Likes and comments take no --occurrences"),
            TallyError::InvalidMember(_)
            | TallyError::DuplicateMember(_)
            | TallyError::MemberNotFound(_) => {
                base.with_suggestion("List members: tally roster list")
            }
            TallyError::UnknownMemberReference(_) => base
                .with_context("A username reached scoring without matching the roster"),
            TallyError::InvalidSettings(_) | TallyError::CounterOverflow(_) => {
                base.with_suggestion("Fix or remove tally.toml in the data directory")
            }
        };
        hinted.with_source(err)
    }
}
