// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unit of work over the materialized state.
//!
//! A [`Transaction`] records every write as an [`Event`] and keeps an overlay
//! of pending changes so later reads in the same transaction see earlier
//! writes. Nothing reaches the committed state until the store appends the
//! collected events to the WAL and applies them.

use crate::state::MaterializedState;
use fj_core::{
    Driver, DriverId, Event, Job, JobId, ResourceKind, StatusHistoryEntry, TimeWindow, Truck,
    TruckId,
};
use std::collections::{HashMap, HashSet};

/// Entity persistence operations used by the scheduling engine.
///
/// Lookups take exact IDs. Deleting an absent entity is a no-op.
pub trait EntityStore {
    fn find_job(&self, id: &str) -> Option<Job>;
    fn job_exists(&self, id: &str) -> bool {
        self.find_job(id).is_some()
    }
    /// Insert or replace by `job.id`.
    fn save_job(&mut self, job: Job) -> Job;
    fn delete_job(&mut self, id: &JobId);
    fn all_jobs(&self) -> Vec<Job>;
    /// Jobs booking the resource whose window overlaps `window`, in pickup
    /// order. Status is not filtered.
    fn find_overlapping(
        &self,
        kind: ResourceKind,
        resource_id: &str,
        exclude: Option<&JobId>,
        window: &TimeWindow,
    ) -> Vec<Job>;

    fn append_history(&mut self, entry: StatusHistoryEntry);
    /// Entries ordered by `changed_at`; ties keep append order.
    fn find_history(&self, job_id: &str) -> Vec<StatusHistoryEntry>;
    fn delete_history(&mut self, job_id: &JobId);

    fn find_driver(&self, id: &str) -> Option<Driver>;
    fn save_driver(&mut self, driver: Driver) -> Driver;
    fn delete_driver(&mut self, id: &DriverId);
    fn all_drivers(&self) -> Vec<Driver>;

    fn find_truck(&self, id: &str) -> Option<Truck>;
    fn save_truck(&mut self, truck: Truck) -> Truck;
    fn delete_truck(&mut self, id: &TruckId);
    fn all_trucks(&self) -> Vec<Truck>;
}

pub struct Transaction<'a> {
    base: &'a MaterializedState,
    /// `None` marks a pending delete
    jobs: HashMap<String, Option<Job>>,
    drivers: HashMap<String, Option<Driver>>,
    trucks: HashMap<String, Option<Truck>>,
    history: HashMap<String, Vec<StatusHistoryEntry>>,
    cleared: HashSet<String>,
    events: Vec<Event>,
}

impl<'a> Transaction<'a> {
    pub(crate) fn new(base: &'a MaterializedState) -> Self {
        Self {
            base,
            jobs: HashMap::new(),
            drivers: HashMap::new(),
            trucks: HashMap::new(),
            history: HashMap::new(),
            cleared: HashSet::new(),
            events: Vec::new(),
        }
    }

    /// Events recorded so far, in write order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub(crate) fn into_events(self) -> Vec<Event> {
        self.events
    }
}

/// Committed entries not shadowed by the overlay, plus the overlay's live entries.
fn merged<V: Clone>(
    base: &HashMap<String, V>,
    overlay: &HashMap<String, Option<V>>,
) -> Vec<V> {
    base.iter()
        .filter(|(id, _)| !overlay.contains_key(id.as_str()))
        .map(|(_, v)| v.clone())
        .chain(overlay.values().flatten().cloned())
        .collect()
}

fn lookup<V: Clone>(
    base: &HashMap<String, V>,
    overlay: &HashMap<String, Option<V>>,
    id: &str,
) -> Option<V> {
    match overlay.get(id) {
        Some(pending) => pending.clone(),
        None => base.get(id).cloned(),
    }
}

impl EntityStore for Transaction<'_> {
    fn find_job(&self, id: &str) -> Option<Job> {
        lookup(&self.base.jobs, &self.jobs, id)
    }

    fn save_job(&mut self, job: Job) -> Job {
        self.events.push(Event::JobSaved { job: job.clone() });
        self.jobs.insert(job.id.to_string(), Some(job.clone()));
        job
    }

    fn delete_job(&mut self, id: &JobId) {
        self.events.push(Event::JobDeleted { id: id.clone() });
        self.jobs.insert(id.to_string(), None);
    }

    fn all_jobs(&self) -> Vec<Job> {
        let mut jobs = merged(&self.base.jobs, &self.jobs);
        jobs.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        jobs
    }

    fn find_overlapping(
        &self,
        kind: ResourceKind,
        resource_id: &str,
        exclude: Option<&JobId>,
        window: &TimeWindow,
    ) -> Vec<Job> {
        let committed = self
            .base
            .find_overlapping(kind, resource_id, exclude, window)
            .into_iter()
            .filter(|job| !self.jobs.contains_key(job.id.as_str()))
            .cloned();
        let pending = self
            .jobs
            .values()
            .flatten()
            .filter(|job| exclude != Some(&job.id))
            .filter(|job| job.resource_id(kind) == Some(resource_id))
            .filter(|job| job.window().is_some_and(|w| w.overlaps(window)))
            .cloned();

        let mut hits: Vec<Job> = committed.chain(pending).collect();
        hits.sort_by(|a, b| a.pickup_time.cmp(&b.pickup_time).then_with(|| a.id.cmp(&b.id)));
        hits
    }

    fn append_history(&mut self, entry: StatusHistoryEntry) {
        self.events.push(Event::HistoryAppended { entry: entry.clone() });
        self.history.entry(entry.job_id.to_string()).or_default().push(entry);
    }

    fn find_history(&self, job_id: &str) -> Vec<StatusHistoryEntry> {
        let mut entries = if self.cleared.contains(job_id) {
            Vec::new()
        } else {
            self.base.history.get(job_id).cloned().unwrap_or_default()
        };
        entries.extend(self.history.get(job_id).into_iter().flatten().cloned());
        entries.sort_by_key(|e| e.changed_at);
        entries
    }

    fn delete_history(&mut self, job_id: &JobId) {
        self.events.push(Event::HistoryCleared { job_id: job_id.clone() });
        self.history.remove(job_id.as_str());
        self.cleared.insert(job_id.to_string());
    }

    fn find_driver(&self, id: &str) -> Option<Driver> {
        lookup(&self.base.drivers, &self.drivers, id)
    }

    fn save_driver(&mut self, driver: Driver) -> Driver {
        self.events.push(Event::DriverSaved { driver: driver.clone() });
        self.drivers.insert(driver.id.to_string(), Some(driver.clone()));
        driver
    }

    fn delete_driver(&mut self, id: &DriverId) {
        self.events.push(Event::DriverDeleted { id: id.clone() });
        self.drivers.insert(id.to_string(), None);
    }

    fn all_drivers(&self) -> Vec<Driver> {
        let mut drivers = merged(&self.base.drivers, &self.drivers);
        drivers.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        drivers
    }

    fn find_truck(&self, id: &str) -> Option<Truck> {
        lookup(&self.base.trucks, &self.trucks, id)
    }

    fn save_truck(&mut self, truck: Truck) -> Truck {
        self.events.push(Event::TruckSaved { truck: truck.clone() });
        self.trucks.insert(truck.id.to_string(), Some(truck.clone()));
        truck
    }

    fn delete_truck(&mut self, id: &TruckId) {
        self.events.push(Event::TruckDeleted { id: id.clone() });
        self.trucks.insert(id.to_string(), None);
    }

    fn all_trucks(&self) -> Vec<Truck> {
        let mut trucks = merged(&self.base.trucks, &self.trucks);
        trucks.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        trucks
    }
}

#[cfg(test)]
#[path = "transaction_tests.rs"]
mod tests;
