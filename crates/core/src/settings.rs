// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Point rules and matching configuration
//!
//! Loaded once at startup from an optional `tally.toml`:
//!
//! ```toml
//! [points]
//! likes = 1
//! comments = 1
//! tags = 5
//! comment_cap = 4
//!
//! [matching]
//! threshold = 0.8
//! ```

use crate::error::TallyError;
use crate::interaction::InteractionKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Per-kind point values and the per-post comment cap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointRules {
    pub likes: u64,
    pub comments: u64,
    pub tags: u64,
    /// Maximum comment occurrences per member per post that earn points
    pub comment_cap: u64,
}

impl Default for PointRules {
    fn default() -> Self {
        Self {
            likes: 1,
            comments: 1,
            tags: 5,
            comment_cap: 4,
        }
    }
}

impl PointRules {
    /// Point value of one occurrence of the given kind
    pub fn value(&self, kind: InteractionKind) -> u64 {
        match kind {
            InteractionKind::Likes => self.likes,
            InteractionKind::Comments => self.comments,
            InteractionKind::Tags => self.tags,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct Matching {
    threshold: f64,
}

impl Default for Matching {
    fn default() -> Self {
        Self { threshold: 0.8 }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingsFile {
    points: PointRules,
    matching: Matching,
}

/// Process-wide engine configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub rules: PointRules,
    /// Minimum fuzzy similarity for a candidate to resolve
    pub threshold: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rules: PointRules::default(),
            threshold: Matching::default().threshold,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text; absent keys take their defaults
    pub fn parse(content: &str) -> Result<Self, TallyError> {
        let file: SettingsFile =
            toml::from_str(content).map_err(|e| TallyError::InvalidSettings(e.to_string()))?;
        let settings = Self {
            rules: file.points,
            threshold: file.matching.threshold,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file, or defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self, TallyError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(TallyError::InvalidSettings(format!(
                "{}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn validate(&self) -> Result<(), TallyError> {
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(TallyError::InvalidSettings(format!(
                "matching.threshold must be in (0, 1], got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
