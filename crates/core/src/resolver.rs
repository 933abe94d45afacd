// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Username resolution against the roster
//!
//! Raw candidates come from scraped or OCR-extracted text and are often
//! misspelled. A candidate resolves to at most one roster member: an exact
//! canonical match wins outright, otherwise the closest roster username is
//! accepted if its similarity reaches the threshold.

use crate::roster::Roster;

/// Canonicalize a raw username: trim, drop a leading `@`, lower-case
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('@').unwrap_or(trimmed);
    trimmed.trim().to_lowercase()
}

/// Normalized edit-distance similarity in `[0, 1]`
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

/// A candidate matched to a roster member
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub username: String,
    /// 1.0 for an exact match
    pub score: f64,
}

/// Resolves raw candidates against a roster snapshot. Pure; never mutates.
pub struct Resolver<'a> {
    roster: &'a Roster,
    threshold: f64,
}

impl<'a> Resolver<'a> {
    pub fn new(roster: &'a Roster, threshold: f64) -> Self {
        Self { roster, threshold }
    }

    /// Resolve one candidate to a roster member.
    ///
    /// Ties on the best fuzzy score go to the alphabetically-first username
    /// so the result does not depend on roster order.
    pub fn resolve(&self, candidate: &str) -> Option<Resolution> {
        let key = normalize(candidate);
        if key.is_empty() {
            return None;
        }

        if self.roster.contains(&key) {
            return Some(Resolution {
                username: key,
                score: 1.0,
            });
        }

        let mut best: Option<(&str, f64)> = None;
        for username in self.roster.usernames() {
            let score = similarity(&key, username);
            best = match best {
                Some((best_name, best_score))
                    if best_score > score
                        || (best_score == score && best_name <= username) =>
                {
                    Some((best_name, best_score))
                }
                _ => Some((username, score)),
            };
        }

        let (username, score) = best?;
        if score >= self.threshold {
            tracing::debug!(candidate = %key, username, score, "fuzzy match");
            Some(Resolution {
                username: username.to_string(),
                score,
            })
        } else {
            tracing::trace!(candidate = %key, best = username, score, "no match");
            None
        }
    }

    /// Resolve every candidate independently.
    ///
    /// Unmatched candidates are dropped. Input order and duplicates are kept,
    /// since repeated matches count repeated comments.
    pub fn resolve_all<I, S>(&self, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        candidates
            .into_iter()
            .filter_map(|c| self.resolve(c.as_ref()))
            .map(|r| r.username)
            .collect()
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
