// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-invocation context: locked store, loaded tracker, logging

use anyhow::Result;
use std::path::Path;
use tally_core::{Settings, SystemClock, Tracker};
use tally_storage::{Store, StoreError, StoreLock};
use tracing_appender::non_blocking::WorkerGuard;

use crate::error::CliError;
use crate::output::OutputFormat;

const LOG_FILE: &str = "tally.log";

/// Everything a command needs. The store lock is held until drop, so the
/// whole load-mutate-save cycle is exclusive.
pub struct Context {
    pub tracker: Tracker<SystemClock>,
    pub format: OutputFormat,
    store: Store,
    // NOTE(lifetime): Held to keep the data directory locked; released on drop
    _lock: StoreLock,
    _log_guard: WorkerGuard,
}

impl Context {
    pub fn open(data_dir: &Path, format: OutputFormat) -> Result<Self> {
        let store = Store::open(data_dir)?;
        let log_guard = setup_logging(store.dir());

        let lock = store.lock().map_err(|e| match e {
            StoreError::Locked(dir) => anyhow::Error::from(CliError::data_dir_locked(&dir)),
            other => anyhow::Error::from(other),
        })?;

        let settings = Settings::load(&store.settings_path()).map_err(CliError::from)?;
        let state = store.load()?;
        tracing::debug!(dir = %store.dir().display(), "opened data directory");

        Ok(Self {
            tracker: Tracker::with_state(state, settings, SystemClock),
            format,
            store,
            _lock: lock,
            _log_guard: log_guard,
        })
    }

    /// Persist tracker state after a successful mutation
    pub fn save(&self) -> Result<()> {
        self.store.save(self.tracker.state())?;
        Ok(())
    }
}

fn setup_logging(dir: &Path) -> WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_env("TALLY_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    // A subscriber may already be installed when commands run in-process
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .try_init();

    guard
}
