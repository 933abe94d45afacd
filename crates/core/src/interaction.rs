// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interaction types: raw extractor events and scored records

use crate::error::TallyError;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of engagement being scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    #[serde(alias = "likers")]
    Likes,
    #[serde(alias = "commenters")]
    Comments,
    #[serde(alias = "tagged_users")]
    Tags,
}

impl InteractionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionKind::Likes => "likes",
            InteractionKind::Comments => "comments",
            InteractionKind::Tags => "tags",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionKind {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "likes" | "likers" => Ok(InteractionKind::Likes),
            "comments" | "commenters" => Ok(InteractionKind::Comments),
            "tags" | "tagged_users" => Ok(InteractionKind::Tags),
            other => Err(TallyError::MalformedInteraction(format!(
                "unknown interaction type '{}'",
                other
            ))),
        }
    }
}

/// An unscored event as produced by upstream extraction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInteraction {
    #[serde(rename = "type", default)]
    pub kind: Option<InteractionKind>,
    #[serde(default, alias = "postUrl")]
    pub post_reference: String,
    /// Raw usernames as extracted, possibly misspelled or non-members
    #[serde(default)]
    pub candidates: Vec<String>,
    /// Operator-supplied username; replaces `candidates` when present
    #[serde(default)]
    pub manual_username: Option<String>,
    /// Number of tag occurrences found by the extractor (tags only)
    #[serde(default)]
    pub occurrences: Option<u32>,
    /// Full date-time, or a bare date stamped at noon
    #[serde(default, deserialize_with = "date_or_datetime")]
    pub timestamp: Option<NaiveDateTime>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Stamp {
    DateTime(NaiveDateTime),
    Date(NaiveDate),
}

fn noon(date: NaiveDate) -> NaiveDateTime {
    date.and_time(chrono::NaiveTime::MIN) + chrono::Duration::hours(12)
}

fn date_or_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Stamp>::deserialize(deserializer)?.map(|stamp| match stamp {
        Stamp::DateTime(at) => at,
        Stamp::Date(date) => noon(date),
    }))
}

impl RawInteraction {
    pub fn new<I, S>(kind: InteractionKind, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: Some(kind),
            candidates: candidates.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_post(mut self, post_reference: impl Into<String>) -> Self {
        self.post_reference = post_reference.into();
        self
    }

    pub fn with_occurrences(mut self, occurrences: u32) -> Self {
        self.occurrences = Some(occurrences);
        self
    }

    pub fn with_manual_username(mut self, username: impl Into<String>) -> Self {
        self.manual_username = Some(username.into());
        self
    }

    pub fn at(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Stamp the event at noon on the given date
    pub fn on(self, date: NaiveDate) -> Self {
        self.at(noon(date))
    }

    /// Candidates to resolve: the manual username if given, else the raw list
    pub fn effective_candidates(&self) -> Vec<&str> {
        match self.manual_username.as_deref() {
            Some(manual) if !manual.trim().is_empty() => vec![manual],
            _ => self.candidates.iter().map(String::as_str).collect(),
        }
    }

    /// Check required fields, returning the kind and per-member occurrence count.
    ///
    /// Tags need an explicit count of at least one; likes and comments take
    /// none and count as one.
    pub fn validate(&self) -> Result<(InteractionKind, u32), TallyError> {
        let kind = self.kind.ok_or_else(|| {
            TallyError::MalformedInteraction("missing interaction type".to_string())
        })?;

        match (kind, self.occurrences) {
            (InteractionKind::Tags, Some(n)) if n >= 1 => Ok((kind, n)),
            (InteractionKind::Tags, Some(_)) => Err(TallyError::MalformedInteraction(
                "tag occurrence count must be at least 1".to_string(),
            )),
            (InteractionKind::Tags, None) => Err(TallyError::MalformedInteraction(
                "tags require an occurrence count".to_string(),
            )),
            (_, Some(_)) => Err(TallyError::MalformedInteraction(format!(
                "{} do not take an occurrence count",
                kind
            ))),
            (_, None) => Ok((kind, 1)),
        }
    }
}

/// One scored event. Immutable once logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub timestamp: NaiveDateTime,
    #[serde(default, alias = "postUrl")]
    pub post_reference: String,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    /// Canonical usernames in extraction order, duplicates kept
    #[serde(rename = "usernames")]
    pub resolved_usernames: Vec<String>,
    /// Tag occurrences per member; always 1 for likes and comments
    #[serde(default = "default_occurrences")]
    pub occurrences: u32,
}

/// Records written before occurrence counts were stored scored one tag each
fn default_occurrences() -> u32 {
    1
}

impl InteractionRecord {
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// Inclusive date bounds; an absent bound is open on that side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// No bounds on either side
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        !matches!(self.start, Some(start) if date < start)
            && !matches!(self.end, Some(end) if date > end)
    }
}

#[cfg(test)]
#[path = "interaction_tests.rs"]
mod tests;
