// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fj-storage: event-sourced persistence for fleet jobs

mod migration;
mod snapshot;
mod state;
mod store;
mod transaction;
mod wal;

pub use migration::{Migration, MigrationError, MigrationRegistry};
pub use snapshot::{Snapshot, SnapshotError, CURRENT_SNAPSHOT_VERSION};
pub use state::{MaterializedState, ScheduleIndex};
pub use store::{Store, StoreConfig, StoreError, LOCK_FILE, SNAPSHOT_FILE, WAL_FILE};
pub use transaction::{EntityStore, Transaction};
pub use wal::{Wal, WalEntry, WalError};
