// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod create;
mod lifecycle;
mod properties;
mod queries;
mod scenario;

use super::*;
use crate::request::{DriverRequest, TruckRequest};
use fj_core::test_support::at;
use fj_core::{Driver, FakeClock, Truck};
use std::time::Duration;

struct Harness {
    scheduler: Scheduler<FakeClock>,
    clock: FakeClock,
    driver: Driver,
    truck: Truck,
}

impl Harness {
    fn new() -> Self {
        Self::with_options(SchedulerOptions::default())
    }

    fn with_options(options: SchedulerOptions) -> Self {
        let clock = FakeClock::at(at(8, 0));
        let scheduler = Scheduler::with_options(Store::in_memory(), clock.clone(), options);
        let fleet = scheduler.fleet();
        let driver = fleet.add_driver(DriverRequest::new("Ana")).unwrap();
        let truck = fleet.add_truck(TruckRequest::new("B-100")).unwrap();
        Self { scheduler, clock, driver, truck }
    }

    /// A request for the harness driver over `pickup..dropoff` (whole hours).
    fn driver_haul(&self, pickup: u32, dropoff: u32) -> JobRequest {
        JobRequest::new("Haul", "Depot A", "Depot B")
            .window(at(pickup, 0), at(dropoff, 0))
            .driver(self.driver.id.as_str())
    }

    fn truck_haul(&self, pickup: u32, dropoff: u32) -> JobRequest {
        JobRequest::new("Haul", "Depot A", "Depot B")
            .window(at(pickup, 0), at(dropoff, 0))
            .truck(self.truck.id.as_str())
    }

    fn create(&self, req: JobRequest) -> Job {
        self.scheduler.create_job(req).unwrap()
    }

    fn tick(&self) {
        self.clock.advance(Duration::from_secs(60));
    }

    fn history(&self, job: &Job) -> Vec<StatusHistoryEntry> {
        self.scheduler.job_history(&job.id).unwrap()
    }

    fn wal_seq(&self) -> u64 {
        self.scheduler.store().seq()
    }
}

fn expect_conflict(err: SchedulerError, resource: ResourceKind, blocking: &Job) {
    match err {
        SchedulerError::Conflict { resource: r, blocking_job, .. } => {
            assert_eq!(r, resource);
            assert_eq!(blocking_job, blocking.id);
        }
        other => panic!("expected conflict, got {other:?}"),
    }
}
