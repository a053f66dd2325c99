// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transport job and its booking window.

use crate::resource::{DriverId, TruckId};
use crate::status::{JobStatus, ResourceKind};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for a transport job.
    pub struct JobId("job-");
}

/// Half-open booking interval `[pickup, dropoff)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub pickup: DateTime<Utc>,
    pub dropoff: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(pickup: DateTime<Utc>, dropoff: DateTime<Utc>) -> Self {
        Self { pickup, dropoff }
    }

    /// A window exists only when both ends are known.
    pub fn from_bounds(
        pickup: Option<DateTime<Utc>>,
        dropoff: Option<DateTime<Utc>>,
    ) -> Option<Self> {
        Some(Self::new(pickup?, dropoff?))
    }

    /// `p1 < d2 && p2 < d1`: windows that merely touch do not overlap.
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.pickup < other.dropoff && other.pickup < self.dropoff
    }

    /// Pickup strictly before dropoff.
    pub fn is_ordered(&self) -> bool {
        self.pickup < self.dropoff
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}..{}",
            self.pickup.format("%Y-%m-%dT%H:%M"),
            self.dropoff.format("%Y-%m-%dT%H:%M")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<DriverId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truck_id: Option<TruckId>,
    /// Set once when the job is first persisted.
    pub created_at: DateTime<Utc>,
}

impl Job {
    pub fn window(&self) -> Option<TimeWindow> {
        TimeWindow::from_bounds(self.pickup_time, self.dropoff_time)
    }

    /// ID of the booked resource of the given kind, if any.
    pub fn resource_id(&self, kind: ResourceKind) -> Option<&str> {
        match kind {
            ResourceKind::Driver => self.driver_id.as_deref(),
            ResourceKind::Truck => self.truck_id.as_deref(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

crate::builder! {
    pub struct JobBuilder => Job {
        into {
            id: JobId = JobId::new(),
            title: String = "Test haul",
            pickup_location: String = "Depot A",
            dropoff_location: String = "Depot B",
        }
        set {
            status: JobStatus = JobStatus::Open,
            created_at: DateTime<Utc> = crate::test_support::base_time(),
        }
        option {
            pickup_time: DateTime<Utc> = None,
            dropoff_time: DateTime<Utc> = None,
            price: Decimal = None,
            driver_id: DriverId = None,
            truck_id: TruckId = None,
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
impl JobBuilder {
    /// Set both ends of the booking window.
    pub fn window(self, pickup: DateTime<Utc>, dropoff: DateTime<Utc>) -> Self {
        self.pickup_time(pickup).dropoff_time(dropoff)
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
