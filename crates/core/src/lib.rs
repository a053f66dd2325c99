// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fj-core: domain types for the fleet job scheduler

pub mod macros;

pub mod clock;
pub mod event;
pub mod history;
pub mod id;
pub mod job;
pub mod resource;
pub mod status;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use clock::{Clock, FakeClock, SystemClock};
pub use event::Event;
pub use history::{HistoryId, StatusHistoryEntry};
pub use id::short;
#[cfg(any(test, feature = "test-support"))]
pub use job::JobBuilder;
pub use job::{Job, JobId, TimeWindow};
#[cfg(any(test, feature = "test-support"))]
pub use resource::{DriverBuilder, TruckBuilder};
pub use resource::{Driver, DriverId, Truck, TruckId, DEFAULT_DRIVER_STATUS, DEFAULT_TRUCK_STATUS};
pub use status::{JobStatus, ParseStatusError, ResourceKind};
