// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Roster store: the authoritative member list and accumulated counters

use crate::error::TallyError;
use crate::resolver::normalize;
use serde::{Deserialize, Serialize};

/// One roster entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Canonical username: lower-case, trimmed, no leading `@`
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub tags: u64,
    #[serde(default)]
    pub total_points: u64,
}

impl Member {
    /// Create a member with zeroed counters. The username is canonicalized.
    pub fn new(
        username: impl AsRef<str>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            username: normalize(username.as_ref()),
            first_name: first_name.into(),
            last_name: last_name.into(),
            likes: 0,
            comments: 0,
            tags: 0,
            total_points: 0,
        }
    }

    /// Display name as "First Last", falling back to the username
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.username.clone()
        } else {
            name.to_string()
        }
    }

    fn clear_counters(&mut self) {
        self.likes = 0;
        self.comments = 0;
        self.tags = 0;
        self.total_points = 0;
    }
}

/// Ordered member collection keyed by canonical username.
///
/// Iteration order is insertion order. Counters are only changed through
/// the scoring rules or [`Roster::reset_counters`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    members: Vec<Member>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from raw member records.
    ///
    /// Usernames are canonicalized, blank usernames are skipped and a later
    /// duplicate of an existing username is dropped.
    pub fn from_members(members: impl IntoIterator<Item = Member>) -> Self {
        let mut roster = Self::new();
        for mut member in members {
            member.username = normalize(&member.username);
            if member.username.is_empty() {
                continue;
            }
            if roster.contains(&member.username) {
                tracing::warn!(username = %member.username, "dropping duplicate roster entry");
                continue;
            }
            roster.members.push(member);
        }
        roster
    }

    /// Add a member, rejecting duplicates and blank usernames
    pub fn add(&mut self, mut member: Member) -> Result<(), TallyError> {
        member.username = normalize(&member.username);
        if member.username.is_empty() {
            return Err(TallyError::InvalidMember(
                "username is empty".to_string(),
            ));
        }
        if self.contains(&member.username) {
            return Err(TallyError::DuplicateMember(member.username));
        }
        self.members.push(member);
        Ok(())
    }

    /// Remove a member by username (any casing or leading `@`)
    pub fn remove(&mut self, username: &str) -> Result<Member, TallyError> {
        let key = normalize(username);
        let index = self
            .members
            .iter()
            .position(|m| m.username == key)
            .ok_or(TallyError::MemberNotFound(key))?;
        Ok(self.members.remove(index))
    }

    pub fn get(&self, username: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.username == username)
    }

    pub(crate) fn get_mut(&mut self, username: &str) -> Option<&mut Member> {
        self.members.iter_mut().find(|m| m.username == username)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.get(username).is_some()
    }

    /// Canonical usernames in roster order
    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.username.as_str())
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Member> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Zero every member's counters
    pub fn reset_counters(&mut self) {
        for member in &mut self.members {
            member.clear_counters();
        }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Member;
    type IntoIter = std::slice::Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod tests;
