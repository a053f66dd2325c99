// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted facts about the fleet.
//!
//! Every store mutation is expressed as one of these events. The write-ahead
//! log records them and the materialized state is derived by replaying them.

mod methods;

use crate::history::StatusHistoryEntry;
use crate::job::{Job, JobId};
use crate::resource::{Driver, DriverId, Truck, TruckId};
use serde::{Deserialize, Serialize};

/// Serializes with `{"type": "entity:verb", ...fields}` format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Driver created or replaced
    #[serde(rename = "driver:saved")]
    DriverSaved { driver: Driver },

    #[serde(rename = "driver:deleted")]
    DriverDeleted { id: DriverId },

    /// Truck created or replaced
    #[serde(rename = "truck:saved")]
    TruckSaved { truck: Truck },

    #[serde(rename = "truck:deleted")]
    TruckDeleted { id: TruckId },

    /// Job created or replaced
    #[serde(rename = "job:saved")]
    JobSaved { job: Job },

    #[serde(rename = "job:deleted")]
    JobDeleted { id: JobId },

    #[serde(rename = "history:appended")]
    HistoryAppended { entry: StatusHistoryEntry },

    /// All history entries of a job removed (precedes `job:deleted`)
    #[serde(rename = "history:cleared")]
    HistoryCleared { job_id: JobId },
}
