// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Write-ahead log of committed transactions.
//!
//! One JSON line per transaction: `{"seq": n, "events": [...]}`. A line is
//! either fully readable or treated as corrupt, so a torn write discards the
//! whole transaction and never half of it.

use crate::snapshot::{replace_file, rotate_bak_path};
use fj_core::Event;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum WalError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("WAL at {0} could not roll back a failed append; reopen the store")]
    Poisoned(PathBuf),
}

/// A committed transaction read back from the log.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WalEntry {
    pub seq: u64,
    pub events: Vec<Event>,
}

#[derive(Serialize)]
struct WalRecord<'a> {
    seq: u64,
    events: &'a [Event],
}

pub struct Wal {
    path: PathBuf,
    file: File,
    write_seq: u64,
    /// End of the last committed line; anything past it is a failed append
    len: u64,
    poisoned: bool,
}

impl Wal {
    /// Open (or create) the log at `path`.
    ///
    /// `floor_seq` is the sequence already covered by a snapshot; new entries
    /// are numbered after both it and the last valid entry in the file.
    ///
    /// A corrupt tail is not fatal: the file is rotated to `.bak` and the
    /// valid prefix is rewritten in its place.
    pub fn open(path: &Path, floor_seq: u64) -> Result<Self, WalError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut last_seq = 0;
        let mut len = 0;
        if path.exists() {
            let bytes = fs::read(path)?;
            let scan = scan(&bytes);
            last_seq = scan.entries.last().map(|e| e.seq).unwrap_or(0);
            len = scan.valid_len as u64;
            if scan.corrupt {
                let bak = rotate_bak_path(path);
                warn!(
                    path = %path.display(),
                    backup = %bak.display(),
                    valid_entries = scan.entries.len(),
                    "corrupt WAL tail, keeping valid prefix"
                );
                fs::rename(path, &bak)?;
                replace_file(path, &bytes[..scan.valid_len])?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
            write_seq: last_seq.max(floor_seq),
            len,
            poisoned: false,
        })
    }

    /// Sequence number of the last appended transaction.
    pub fn write_seq(&self) -> u64 {
        self.write_seq
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one transaction and sync it to disk before returning.
    ///
    /// On failure the file is cut back to the last committed line, so a
    /// failed append is neither replayed nor left in front of the next one.
    /// If even that fails, the log refuses further appends.
    pub fn append(&mut self, events: &[Event]) -> Result<u64, WalError> {
        if self.poisoned {
            return Err(WalError::Poisoned(self.path.clone()));
        }
        let seq = self.write_seq + 1;
        let mut line = serde_json::to_vec(&WalRecord { seq, events })?;
        line.push(b'\n');

        if let Err(e) = self.write_line(&line) {
            if let Err(rollback) = self.rollback() {
                warn!(path = %self.path.display(), error = %rollback, "WAL rollback failed");
                self.poisoned = true;
            }
            return Err(e.into());
        }
        self.write_seq = seq;
        self.len += line.len() as u64;
        Ok(seq)
    }

    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        // Bytes past the committed end belong to an earlier failed append
        if self.file.metadata()?.len() != self.len {
            warn!(path = %self.path.display(), committed = self.len, "discarding torn WAL tail");
            self.rollback()?;
        }
        self.file.write_all(line)?;
        self.file.flush()?;
        self.file.sync_data()
    }

    fn rollback(&mut self) -> io::Result<()> {
        self.file.set_len(self.len)?;
        self.file.sync_data()
    }

    /// All entries with `seq > after`, stopping at the first corrupt line.
    pub fn entries_after(&self, after: u64) -> Result<Vec<WalEntry>, WalError> {
        let bytes = fs::read(&self.path)?;
        Ok(scan(&bytes).entries.into_iter().filter(|e| e.seq > after).collect())
    }

    /// Drop entries with `seq < keep_from` (they are covered by a snapshot).
    pub fn truncate_before(&mut self, keep_from: u64) -> Result<(), WalError> {
        let bytes = fs::read(&self.path)?;
        let mut kept = Vec::new();
        for line in bytes[..scan(&bytes).valid_len].split_inclusive(|b| *b == b'\n') {
            let entry: WalEntry = serde_json::from_slice(line)?;
            if entry.seq >= keep_from {
                kept.extend_from_slice(line);
            }
        }

        replace_file(&self.path, &kept)?;
        self.file = OpenOptions::new().append(true).open(&self.path)?;
        self.len = kept.len() as u64;
        self.poisoned = false;
        Ok(())
    }
}

struct Scan {
    entries: Vec<WalEntry>,
    /// Byte length of the valid, newline-terminated prefix
    valid_len: usize,
    corrupt: bool,
}

fn scan(bytes: &[u8]) -> Scan {
    let mut entries = Vec::new();
    let mut valid_len = 0;
    for line in bytes.split_inclusive(|b| *b == b'\n') {
        if !line.ends_with(b"\n") {
            break;
        }
        match serde_json::from_slice::<WalEntry>(line) {
            Ok(entry) => {
                entries.push(entry);
                valid_len += line.len();
            }
            Err(_) => break,
        }
    }
    Scan { entries, valid_len, corrupt: valid_len < bytes.len() }
}

#[cfg(test)]
#[path = "wal_tests.rs"]
mod tests;
