// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status history recorder.

use fj_core::{Clock, Job, JobStatus, StatusHistoryEntry};
use fj_storage::EntityStore;
use tracing::debug;

/// Appends a history entry whenever a job's status actually changes.
#[derive(Clone)]
pub struct HistoryRecorder<C: Clock> {
    clock: C,
}

impl<C: Clock> HistoryRecorder<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Record `from -> to` for `job`, stamped with the current time.
    ///
    /// Nothing is appended when `to` is absent or equal to `from`. Statuses
    /// are compared as parsed values, so `done` and `DONE` are the same
    /// status. Returns the appended entry.
    pub fn record_transition(
        &self,
        store: &mut impl EntityStore,
        job: &Job,
        from: Option<JobStatus>,
        to: Option<JobStatus>,
    ) -> Option<StatusHistoryEntry> {
        let to = to?;
        if from == Some(to) {
            return None;
        }
        let entry = StatusHistoryEntry::new(job.id.clone(), from, to, self.clock.now());
        debug!(job_id = %job.id, transition = %entry.describe(), "recording status change");
        store.append_history(entry.clone());
        Some(entry)
    }
}

#[cfg(test)]
#[path = "recorder_tests.rs"]
mod tests;
