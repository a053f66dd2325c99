// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Double-booking detection.
//!
//! A proposed window conflicts with an existing job when both book the same
//! driver (or truck), the existing job's status is in the policy's active
//! set, and the windows overlap under the half-open rule `p1 < d2 && p2 < d1`.
//! The detector only answers the question; callers decide what a hit means.

use chrono::{DateTime, Utc};
use fj_core::{Job, JobId, JobStatus, ResourceKind, TimeWindow};
use fj_storage::EntityStore;
use tracing::debug;

/// Which statuses still hold a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictPolicy {
    active: Vec<JobStatus>,
}

impl ConflictPolicy {
    pub fn new(active: impl IntoIterator<Item = JobStatus>) -> Self {
        Self { active: active.into_iter().collect() }
    }

    pub fn holds_booking(&self, status: JobStatus) -> bool {
        self.active.contains(&status)
    }
}

impl Default for ConflictPolicy {
    fn default() -> Self {
        Self::new(JobStatus::ACTIVE)
    }
}

/// First job in `jobs` that blocks `window` for the resource.
///
/// Pure: works on any collection of jobs, in iteration order.
pub fn find_conflict<'a>(
    jobs: impl IntoIterator<Item = &'a Job>,
    policy: &ConflictPolicy,
    kind: ResourceKind,
    resource_id: &str,
    exclude: Option<&JobId>,
    window: &TimeWindow,
) -> Option<&'a Job> {
    jobs.into_iter().find(|job| {
        exclude != Some(&job.id)
            && job.resource_id(kind) == Some(resource_id)
            && policy.holds_booking(job.status)
            && job.window().is_some_and(|w| w.overlaps(window))
    })
}

#[derive(Debug, Clone, Default)]
pub struct ConflictDetector {
    policy: ConflictPolicy,
}

impl ConflictDetector {
    pub fn new(policy: ConflictPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ConflictPolicy {
        &self.policy
    }

    /// The job blocking the proposed booking, if any.
    ///
    /// No resource, or a window missing either end, can never conflict.
    pub fn check_conflict(
        &self,
        store: &impl EntityStore,
        kind: ResourceKind,
        resource_id: Option<&str>,
        exclude: Option<&JobId>,
        pickup: Option<DateTime<Utc>>,
        dropoff: Option<DateTime<Utc>>,
    ) -> Option<Job> {
        let resource_id = resource_id?;
        let window = TimeWindow::from_bounds(pickup, dropoff)?;

        let candidates = store.find_overlapping(kind, resource_id, exclude, &window);
        let hit = find_conflict(&candidates, &self.policy, kind, resource_id, exclude, &window);
        debug!(
            %kind,
            resource_id,
            %window,
            candidates = candidates.len(),
            blocking = hit.map(|j| j.id.as_str()),
            "conflict check"
        );
        hit.cloned()
    }
}

#[cfg(test)]
#[path = "conflict_tests.rs"]
mod tests;
