// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON file store for tracker state
//!
//! Layout of a data directory:
//! - `roster.json`: members and counters
//! - `interactions.json`: the interaction log
//! - `undo.json`: pending undo entries
//! - `activity.json`: summary of the last scoring call
//! - `tally.toml`: optional settings
//! - `tally.lock`: exclusive writer lock

use fs2::FileExt;
use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tally_core::{Activity, InteractionLog, Roster, TrackerState, UndoStack};
use thiserror::Error;

const ROSTER_FILE: &str = "roster.json";
const INTERACTIONS_FILE: &str = "interactions.json";
const UNDO_FILE: &str = "undo.json";
const ACTIVITY_FILE: &str = "activity.json";
const SETTINGS_FILE: &str = "tally.toml";
const LOCK_FILE: &str = "tally.lock";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("data directory is locked by another process: {0}")]
    Locked(PathBuf),
}

/// Exclusive writer lock; released on drop
pub struct StoreLock {
    file: File,
    path: PathBuf,
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to release lock");
        }
    }
}

/// File-backed store rooted at a data directory
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open a store, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn settings_path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    /// Take the exclusive writer lock without blocking
    pub fn lock(&self) -> Result<StoreLock, StoreError> {
        let path = self.dir.join(LOCK_FILE);
        let file = File::create(&path)?;
        file.try_lock_exclusive()
            .map_err(|_| StoreError::Locked(self.dir.clone()))?;
        Ok(StoreLock { file, path })
    }

    /// Load all tracker state; missing files yield empty state
    pub fn load(&self) -> Result<TrackerState, StoreError> {
        let roster: Roster = self.load_json(ROSTER_FILE)?.unwrap_or_default();
        let log: InteractionLog = self.load_json(INTERACTIONS_FILE)?.unwrap_or_default();
        let undo: UndoStack = self.load_json(UNDO_FILE)?.unwrap_or_default();
        let last_activity: Option<Activity> = self.load_json(ACTIVITY_FILE)?;

        tracing::debug!(
            dir = %self.dir.display(),
            members = roster.len(),
            interactions = log.len(),
            undo = undo.len(),
            "loaded state"
        );
        Ok(TrackerState {
            roster,
            log,
            undo,
            last_activity,
        })
    }

    /// Persist all tracker state
    pub fn save(&self, state: &TrackerState) -> Result<(), StoreError> {
        self.save_json(ROSTER_FILE, &state.roster)?;
        self.save_json(INTERACTIONS_FILE, &state.log)?;
        self.save_json(UNDO_FILE, &state.undo)?;
        match &state.last_activity {
            Some(activity) => self.save_json(ACTIVITY_FILE, activity)?,
            None => remove_if_exists(&self.dir.join(ACTIVITY_FILE))?,
        }
        tracing::debug!(dir = %self.dir.display(), "saved state");
        Ok(())
    }

    fn load_json<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, StoreError> {
        let path = self.dir.join(name);
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StoreError::Json { path, source })
    }

    /// Write to a sibling temp file, then rename over the target
    fn save_json<T: Serialize>(&self, name: &str, value: &T) -> Result<(), StoreError> {
        let path = self.dir.join(name);
        let tmp = self.dir.join(format!(".{}.tmp", name));
        let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
