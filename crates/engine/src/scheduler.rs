// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job lifecycle orchestration.
//!
//! Every mutation runs as one store transaction: the job write, the conflict
//! checks it depends on, and the history entry it produces either all commit
//! or none do.

use crate::conflict::{ConflictDetector, ConflictPolicy};
use crate::error::{EntityKind, SchedulerError};
use crate::fleet::Fleet;
use crate::recorder::HistoryRecorder;
use crate::request::{non_blank, JobRequest};
use crate::validate::{parse_status, validate_job};
use fj_core::{
    Clock, DriverId, Job, JobId, JobStatus, ResourceKind, StatusHistoryEntry, SystemClock, TruckId,
};
use fj_storage::{EntityStore, Store, Transaction};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct SchedulerOptions {
    /// Reject windows whose pickup is not before their dropoff.
    pub strict_windows: bool,
    pub policy: ConflictPolicy,
}

impl Default for SchedulerOptions {
    fn default() -> Self {
        Self { strict_windows: true, policy: ConflictPolicy::default() }
    }
}

/// Selection for [`Scheduler::list_jobs`]. Empty matches every job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub status: Option<JobStatus>,
    pub driver_id: Option<String>,
    pub truck_id: Option<String>,
}

impl JobFilter {
    fj_core::setters! {
        set {
            status: Option<JobStatus>,
            driver_id: Option<String>,
            truck_id: Option<String>,
        }
    }

    pub fn matches(&self, job: &Job) -> bool {
        self.status.is_none_or(|s| job.status == s)
            && self.driver_id.as_deref().is_none_or(|d| job.driver_id.as_deref() == Some(d))
            && self.truck_id.as_deref().is_none_or(|t| job.truck_id.as_deref() == Some(t))
    }
}

pub struct Scheduler<C: Clock = SystemClock> {
    store: Store,
    detector: ConflictDetector,
    recorder: HistoryRecorder<C>,
    clock: C,
    strict_windows: bool,
}

impl<C: Clock> Scheduler<C> {
    pub fn new(store: Store, clock: C) -> Self {
        Self::with_options(store, clock, SchedulerOptions::default())
    }

    pub fn with_options(store: Store, clock: C, options: SchedulerOptions) -> Self {
        Self {
            store,
            detector: ConflictDetector::new(options.policy),
            recorder: HistoryRecorder::new(clock.clone()),
            clock,
            strict_windows: options.strict_windows,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Driver and truck registry over the same store.
    pub fn fleet(&self) -> Fleet<C> {
        Fleet::new(self.store.clone(), self.clock.clone())
    }

    pub fn create_job(&self, req: JobRequest) -> Result<Job, SchedulerError> {
        validate_job(&req, self.strict_windows)?;
        let status = parse_status(req.status.as_deref())?.unwrap_or_default();

        let job = self.store.transaction(|tx| {
            let driver_id = resolve_driver(tx, req.driver_id.as_deref())?;
            let truck_id = resolve_truck(tx, req.truck_id.as_deref())?;
            let job = Job {
                id: JobId::new(),
                title: req.title,
                pickup_location: req.pickup_location,
                dropoff_location: req.dropoff_location,
                pickup_time: req.pickup_time,
                dropoff_time: req.dropoff_time,
                price: req.price,
                status,
                driver_id,
                truck_id,
                created_at: self.clock.now(),
            };
            self.ensure_available(tx, &job, None)?;

            let job = tx.save_job(job);
            self.recorder.record_transition(tx, &job, None, Some(job.status));
            Ok::<_, SchedulerError>(job)
        })?;

        info!(job_id = %job.id, status = %job.status, "job created");
        Ok(job)
    }

    /// Replace every field of the job with the request's. Status changes
    /// only when the request carries one.
    pub fn update_job(&self, id: &str, req: JobRequest) -> Result<Job, SchedulerError> {
        let (job, old_status) = self.store.transaction(|tx| {
            let mut job =
                tx.find_job(id).ok_or_else(|| SchedulerError::not_found(EntityKind::Job, id))?;
            validate_job(&req, self.strict_windows)?;
            let status = parse_status(req.status.as_deref())?;

            let old_status = job.status;
            job.title = req.title;
            job.pickup_location = req.pickup_location;
            job.dropoff_location = req.dropoff_location;
            job.pickup_time = req.pickup_time;
            job.dropoff_time = req.dropoff_time;
            job.price = req.price;
            if let Some(status) = status {
                job.status = status;
            }
            job.driver_id = resolve_driver(tx, req.driver_id.as_deref())?;
            job.truck_id = resolve_truck(tx, req.truck_id.as_deref())?;
            self.ensure_available(tx, &job, Some(&job.id))?;

            let job = tx.save_job(job);
            self.recorder.record_transition(tx, &job, Some(old_status), Some(job.status));
            Ok::<_, SchedulerError>((job, old_status))
        })?;

        info!(job_id = %job.id, from = %old_status, to = %job.status, "job updated");
        Ok(job)
    }

    /// Change only the status. The window is unchanged, so there is no
    /// conflict re-check.
    pub fn update_status(&self, id: &str, status: &str) -> Result<Job, SchedulerError> {
        let (job, old_status) = self.store.transaction(|tx| {
            let mut job =
                tx.find_job(id).ok_or_else(|| SchedulerError::not_found(EntityKind::Job, id))?;
            let status = parse_status(Some(status))?
                .ok_or_else(|| SchedulerError::invalid("status must not be blank"))?;
            let old_status = job.status;
            job.status = status;

            let job = tx.save_job(job);
            self.recorder.record_transition(tx, &job, Some(old_status), Some(job.status));
            Ok::<_, SchedulerError>((job, old_status))
        })?;

        info!(job_id = %job.id, from = %old_status, to = %job.status, "job status changed");
        Ok(job)
    }

    /// Delete the job's history, then the job.
    pub fn delete_job(&self, id: &str) -> Result<(), SchedulerError> {
        self.store.transaction(|tx| {
            let job =
                tx.find_job(id).ok_or_else(|| SchedulerError::not_found(EntityKind::Job, id))?;
            tx.delete_history(&job.id);
            tx.delete_job(&job.id);
            Ok::<_, SchedulerError>(())
        })?;

        info!(job_id = id, "job deleted");
        Ok(())
    }

    /// History ordered by `changed_at`, oldest first.
    pub fn job_history(&self, id: &str) -> Result<Vec<StatusHistoryEntry>, SchedulerError> {
        self.store.transaction(|tx| {
            if !tx.job_exists(id) {
                return Err(SchedulerError::not_found(EntityKind::Job, id));
            }
            Ok(tx.find_history(id))
        })
    }

    /// Look up a job by ID or unique ID prefix.
    pub fn get_job(&self, id: &str) -> Result<Job, SchedulerError> {
        self.store
            .read(|state| state.get_job(id).cloned())
            .ok_or_else(|| SchedulerError::not_found(EntityKind::Job, id))
    }

    /// Matching jobs by pickup time (unscheduled last), then creation.
    pub fn list_jobs(&self, filter: &JobFilter) -> Vec<Job> {
        let mut jobs: Vec<Job> = self
            .store
            .read(|state| state.jobs.values().filter(|job| filter.matches(job)).cloned().collect());
        jobs.sort_by(|a, b| {
            (a.pickup_time.is_none(), a.pickup_time, a.created_at, &a.id).cmp(&(
                b.pickup_time.is_none(),
                b.pickup_time,
                b.created_at,
                &b.id,
            ))
        });
        jobs
    }

    fn ensure_available(
        &self,
        tx: &Transaction<'_>,
        job: &Job,
        exclude: Option<&JobId>,
    ) -> Result<(), SchedulerError> {
        for kind in [ResourceKind::Driver, ResourceKind::Truck] {
            let resource_id = job.resource_id(kind);
            if let Some(blocking) = self.detector.check_conflict(
                tx,
                kind,
                resource_id,
                exclude,
                job.pickup_time,
                job.dropoff_time,
            ) {
                let resource_id = resource_id.unwrap_or_default().to_string();
                warn!(
                    resource = %kind,
                    %resource_id,
                    blocking_job = %blocking.id,
                    "booking rejected"
                );
                return Err(SchedulerError::Conflict {
                    resource: kind,
                    resource_id,
                    blocking_job: blocking.id,
                });
            }
        }
        Ok(())
    }
}

fn resolve_driver(
    tx: &Transaction<'_>,
    id: Option<&str>,
) -> Result<Option<DriverId>, SchedulerError> {
    let Some(id) = non_blank(id) else { return Ok(None) };
    tx.find_driver(id)
        .map(|driver| Some(driver.id))
        .ok_or_else(|| SchedulerError::not_found(EntityKind::Driver, id))
}

fn resolve_truck(tx: &Transaction<'_>, id: Option<&str>) -> Result<Option<TruckId>, SchedulerError> {
    let Some(id) = non_blank(id) else { return Ok(None) };
    tx.find_truck(id)
        .map(|truck| Some(truck.id))
        .ok_or_else(|| SchedulerError::not_found(EntityKind::Truck, id))
}

#[cfg(test)]
#[path = "scheduler_tests/mod.rs"]
mod tests;
