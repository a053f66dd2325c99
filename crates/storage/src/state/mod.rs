// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Materialized state from WAL replay

mod helpers;
mod history;
mod index;
mod jobs;
mod resources;

pub use index::ScheduleIndex;

use fj_core::{Driver, Event, Job, JobId, ResourceKind, StatusHistoryEntry, TimeWindow, Truck};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Materialized state built from WAL events
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MaterializedState {
    #[serde(default)]
    pub jobs: HashMap<String, Job>,
    #[serde(default)]
    pub drivers: HashMap<String, Driver>,
    #[serde(default)]
    pub trucks: HashMap<String, Truck>,
    /// job_id → entries in append order
    #[serde(default)]
    pub history: HashMap<String, Vec<StatusHistoryEntry>>,
    /// Runtime-only booking index, rebuilt after loading a snapshot.
    #[serde(skip)]
    pub(crate) schedule: ScheduleIndex,
}

impl MaterializedState {
    /// Get a job by ID or unique prefix (like git commit hashes)
    pub fn get_job(&self, id: &str) -> Option<&Job> {
        helpers::find_by_prefix(&self.jobs, id)
    }

    /// Get a driver by ID or unique prefix
    pub fn get_driver(&self, id: &str) -> Option<&Driver> {
        helpers::find_by_prefix(&self.drivers, id)
    }

    /// Get a truck by ID or unique prefix
    pub fn get_truck(&self, id: &str) -> Option<&Truck> {
        helpers::find_by_prefix(&self.trucks, id)
    }

    /// History of a job ordered by `changed_at`; ties keep append order.
    pub fn history_for(&self, job_id: &str) -> Vec<StatusHistoryEntry> {
        let mut entries = self.history.get(job_id).cloned().unwrap_or_default();
        entries.sort_by_key(|e| e.changed_at);
        entries
    }

    /// Jobs booking `resource_id` whose window overlaps `window`, other than
    /// `exclude`. Status is not considered here.
    pub fn find_overlapping(
        &self,
        kind: ResourceKind,
        resource_id: &str,
        exclude: Option<&JobId>,
        window: &TimeWindow,
    ) -> Vec<&Job> {
        self.schedule
            .starting_before(kind, resource_id, window.dropoff)
            .filter(|id| exclude != Some(*id))
            .filter_map(|id| self.jobs.get(id.as_str()))
            .filter(|job| job.window().is_some_and(|w| w.overlaps(window)))
            .collect()
    }

    /// Rebuild runtime-only indexes from the persisted maps.
    pub fn rebuild_index(&mut self) {
        self.schedule = ScheduleIndex::default();
        for job in self.jobs.values() {
            self.schedule.insert(job);
        }
    }

    /// Apply an event to derive state changes.
    ///
    /// All handlers are idempotent: applying the same event twice yields the
    /// same state as applying it once, so replaying a WAL entry that a
    /// snapshot already covers is harmless.
    pub fn apply_event(&mut self, event: &Event) {
        match event {
            Event::JobSaved { .. } | Event::JobDeleted { .. } => jobs::apply(self, event),

            Event::HistoryAppended { .. } | Event::HistoryCleared { .. } => {
                history::apply(self, event)
            }

            Event::DriverSaved { .. }
            | Event::DriverDeleted { .. }
            | Event::TruckSaved { .. }
            | Event::TruckDeleted { .. } => resources::apply(self, event),
        }
    }
}

#[cfg(test)]
#[path = "../state_tests/mod.rs"]
mod tests;
