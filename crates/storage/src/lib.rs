// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! tally-storage: JSON persistence for the engagement tracker

mod store;

pub use store::{Store, StoreError, StoreLock};
