// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Durable, serializable entity store.
//!
//! Layout of a state directory:
//!
//! ```text
//! <dir>/store.lock         exclusive process lock
//! <dir>/snapshot.json.zst  last checkpoint
//! <dir>/events.wal         transactions committed since the checkpoint
//! ```
//!
//! Opening replays the WAL on top of the snapshot. Transactions run one at a
//! time under a single lock, and a transaction is durable once its WAL line
//! is synced.

use crate::snapshot::{Snapshot, SnapshotError};
use crate::state::MaterializedState;
use crate::transaction::Transaction;
use crate::wal::{Wal, WalError};
use chrono::Utc;
use fs2::FileExt;
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, trace, warn};

pub const LOCK_FILE: &str = "store.lock";
pub const SNAPSHOT_FILE: &str = "snapshot.json.zst";
pub const WAL_FILE: &str = "events.wal";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WAL error: {0}")]
    Wal(#[from] WalError),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("store at {0} is locked by another process")]
    Locked(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Committed transactions between automatic checkpoints; 0 disables them.
    pub checkpoint_every: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { checkpoint_every: 1000 }
    }
}

struct Durable {
    wal: Wal,
    snapshot_path: PathBuf,
    // Held for the lifetime of the store; released on drop
    _lock: File,
}

struct Inner {
    state: MaterializedState,
    durable: Option<Durable>,
    seq: u64,
    since_checkpoint: u64,
    config: StoreConfig,
}

/// Handle to the store. Clones share the same state.
#[derive(Clone)]
pub struct Store {
    inner: Arc<Mutex<Inner>>,
}

impl Store {
    /// Open (or create) the store in `dir`, recovering from snapshot and WAL.
    pub fn open(dir: &Path, config: StoreConfig) -> Result<Self, StoreError> {
        fs::create_dir_all(dir)?;

        let lock_path = dir.join(LOCK_FILE);
        let lock = OpenOptions::new().write(true).create(true).truncate(false).open(&lock_path)?;
        lock.try_lock_exclusive().map_err(|_| StoreError::Locked(dir.to_path_buf()))?;

        let snapshot_path = dir.join(SNAPSHOT_FILE);
        let (mut state, snapshot_seq) = match Snapshot::load(&snapshot_path)? {
            Some(snapshot) => {
                info!(
                    seq = snapshot.seq,
                    jobs = snapshot.state.jobs.len(),
                    "loaded snapshot"
                );
                (snapshot.state, snapshot.seq)
            }
            None => (MaterializedState::default(), 0),
        };

        let wal = Wal::open(&dir.join(WAL_FILE), snapshot_seq)?;
        let replay = wal.entries_after(snapshot_seq)?;
        let replayed = replay.len() as u64;
        for entry in &replay {
            for event in &entry.events {
                state.apply_event(event);
            }
        }
        if replayed > 0 {
            info!(after = snapshot_seq, transactions = replayed, "replayed WAL");
        }
        debug!(
            dir = %dir.display(),
            jobs = state.jobs.len(),
            drivers = state.drivers.len(),
            trucks = state.trucks.len(),
            "store opened"
        );

        let seq = wal.write_seq();
        Ok(Self {
            inner: Arc::new(Mutex::new(Inner {
                state,
                durable: Some(Durable { wal, snapshot_path, _lock: lock }),
                seq,
                since_checkpoint: replayed,
                config,
            })),
        })
    }

    /// Volatile store for tests and dry runs.
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: MaterializedState::default(),
                durable: None,
                seq: 0,
                since_checkpoint: 0,
                config: StoreConfig { checkpoint_every: 0 },
            })),
        }
    }

    /// Read committed state.
    pub fn read<R>(&self, f: impl FnOnce(&MaterializedState) -> R) -> R {
        f(&self.inner.lock().state)
    }

    /// Sequence number of the last committed transaction.
    pub fn seq(&self) -> u64 {
        self.inner.lock().seq
    }

    /// Run `f` as one serializable transaction.
    ///
    /// When `f` returns `Err`, nothing it wrote is kept. When it returns `Ok`,
    /// its writes are appended to the WAL as a single entry and then applied.
    /// A transaction that wrote nothing touches neither.
    pub fn transaction<T, E>(
        &self,
        f: impl FnOnce(&mut Transaction<'_>) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<StoreError>,
    {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        let (out, events) = {
            let mut tx = Transaction::new(&inner.state);
            let out = f(&mut tx)?;
            (out, tx.into_events())
        };
        if events.is_empty() {
            return Ok(out);
        }

        let seq = match inner.durable.as_mut() {
            Some(durable) => durable.wal.append(&events).map_err(StoreError::from)?,
            None => inner.seq + 1,
        };
        for event in &events {
            trace!(seq, "{}", event.log_summary());
            inner.state.apply_event(event);
        }
        inner.seq = seq;
        inner.since_checkpoint += 1;
        debug!(seq, events = events.len(), "committed transaction");

        let every = inner.config.checkpoint_every;
        if every > 0 && inner.since_checkpoint >= every {
            // Already durable in the WAL; a failed checkpoint just retries later
            if let Err(e) = inner.checkpoint() {
                warn!(error = %e, "automatic checkpoint failed");
            }
        }
        Ok(out)
    }

    /// Snapshot the committed state and drop the WAL entries it covers.
    /// Returns the sequence number the snapshot covers.
    pub fn checkpoint(&self) -> Result<u64, StoreError> {
        self.inner.lock().checkpoint()
    }
}

impl Inner {
    fn checkpoint(&mut self) -> Result<u64, StoreError> {
        let Some(durable) = self.durable.as_mut() else {
            return Ok(self.seq);
        };
        Snapshot::new(self.seq, self.state.clone(), Utc::now()).save(&durable.snapshot_path)?;
        durable.wal.truncate_before(self.seq + 1)?;
        self.since_checkpoint = 0;
        info!(seq = self.seq, jobs = self.state.jobs.len(), "checkpoint written");
        Ok(self.seq)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
