// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-resource booking index.
//!
//! For every driver and truck, the jobs with a complete time window ordered
//! by pickup. A conflict lookup only visits bookings that start before the
//! proposed dropoff instead of every job in the store.

use chrono::{DateTime, Utc};
use fj_core::{Job, JobId, ResourceKind};
use std::collections::{BTreeSet, HashMap};

type ResourceKey = (ResourceKind, String);

#[derive(Debug, Default, Clone)]
pub struct ScheduleIndex {
    bookings: HashMap<ResourceKey, BTreeSet<(DateTime<Utc>, JobId)>>,
}

impl ScheduleIndex {
    pub fn insert(&mut self, job: &Job) {
        let Some(window) = job.window() else { return };
        for kind in [ResourceKind::Driver, ResourceKind::Truck] {
            if let Some(resource_id) = job.resource_id(kind) {
                self.bookings
                    .entry((kind, resource_id.to_string()))
                    .or_default()
                    .insert((window.pickup, job.id.clone()));
            }
        }
    }

    pub fn remove(&mut self, job: &Job) {
        let Some(window) = job.window() else { return };
        for kind in [ResourceKind::Driver, ResourceKind::Truck] {
            let Some(resource_id) = job.resource_id(kind) else { continue };
            let key = (kind, resource_id.to_string());
            if let Some(set) = self.bookings.get_mut(&key) {
                set.remove(&(window.pickup, job.id.clone()));
                if set.is_empty() {
                    self.bookings.remove(&key);
                }
            }
        }
    }

    /// Jobs booked on the resource whose pickup is strictly before `time`,
    /// in pickup order.
    pub fn starting_before(
        &self,
        kind: ResourceKind,
        resource_id: &str,
        time: DateTime<Utc>,
    ) -> impl Iterator<Item = &JobId> + '_ {
        // (time, "") sorts before every real entry at `time`
        let bound = (time, JobId::from_string(""));
        self.bookings
            .get(&(kind, resource_id.to_string()))
            .into_iter()
            .flat_map(move |set| set.range(..bound.clone()))
            .map(|(_, id)| id)
    }

    /// Number of indexed bookings for a resource.
    pub fn len_for(&self, kind: ResourceKind, resource_id: &str) -> usize {
        self.bookings.get(&(kind, resource_id.to_string())).map_or(0, BTreeSet::len)
    }
}
