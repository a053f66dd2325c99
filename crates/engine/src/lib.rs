// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fj-engine: conflict detection, status history, and job lifecycle

mod conflict;
mod error;
mod fleet;
mod recorder;
mod request;
mod scheduler;
mod validate;

pub use conflict::{find_conflict, ConflictDetector, ConflictPolicy};
pub use error::{EntityKind, SchedulerError};
pub use fleet::Fleet;
pub use recorder::HistoryRecorder;
pub use request::{DriverRequest, JobRequest, TruckRequest};
pub use scheduler::{JobFilter, Scheduler, SchedulerOptions};
pub use validate::{parse_status, validate_job};
