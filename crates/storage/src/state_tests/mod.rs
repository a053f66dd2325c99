// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod history;
mod index;

use super::*;
pub(super) use fj_core::test_support::{
    at, history_appended_event, history_cleared_event, job_deleted_event, job_saved_event,
};
use fj_core::{DriverId, JobStatus, TruckId};

fn driver_job(id: &str, driver: &str, pickup: (u32, u32), dropoff: (u32, u32)) -> Job {
    Job::builder()
        .id(id)
        .driver_id(driver)
        .window(at(pickup.0, pickup.1), at(dropoff.0, dropoff.1))
        .build()
}

// ── Basic job CRUD ───────────────────────────────────────────────────────────

#[test]
fn apply_event_job_saved_inserts() {
    let mut state = MaterializedState::default();
    state.apply_event(&job_saved_event(&Job::builder().id("job-1").build()));

    assert!(state.jobs.contains_key("job-1"));
}

#[test]
fn apply_event_job_saved_replaces() {
    let mut state = MaterializedState::default();
    let job = Job::builder().id("job-1").build();
    state.apply_event(&job_saved_event(&job));

    let mut updated = job.clone();
    updated.status = JobStatus::Done;
    updated.title = "Renamed".to_string();
    state.apply_event(&job_saved_event(&updated));

    assert_eq!(state.jobs.len(), 1);
    assert_eq!(state.jobs["job-1"].status, JobStatus::Done);
    assert_eq!(state.jobs["job-1"].title, "Renamed");
}

#[test]
fn apply_event_job_deleted() {
    let mut state = MaterializedState::default();
    state.apply_event(&job_saved_event(&Job::builder().id("job-1").build()));
    state.apply_event(&job_deleted_event("job-1"));

    assert!(!state.jobs.contains_key("job-1"));
}

#[test]
fn job_delete_does_not_cascade_to_history() {
    let mut state = MaterializedState::default();
    state.apply_event(&job_saved_event(&Job::builder().id("job-1").build()));
    state.apply_event(&history_appended_event("job-1", None, JobStatus::Open, at(9, 0)));
    state.apply_event(&job_deleted_event("job-1"));

    assert_eq!(state.history["job-1"].len(), 1);
}

#[test]
fn apply_is_idempotent() {
    let job = driver_job("job-1", "drv-1", (10, 0), (12, 0));
    let events = vec![
        job_saved_event(&job),
        history_appended_event("job-1", None, JobStatus::Open, at(9, 0)),
    ];

    let mut once = MaterializedState::default();
    for e in &events {
        once.apply_event(e);
    }
    let mut twice = once.clone();
    for e in &events {
        twice.apply_event(e);
    }

    assert_eq!(twice.jobs, once.jobs);
    assert_eq!(twice.history, once.history);
    assert_eq!(twice.schedule.len_for(ResourceKind::Driver, "drv-1"), 1);
}

// ── Resources ────────────────────────────────────────────────────────────────

#[test]
fn apply_driver_and_truck_events() {
    let mut state = MaterializedState::default();
    let driver = Driver::builder().id("drv-1").name("Ana").build();
    let truck = Truck::builder().id("trk-1").plate_number("B-123").build();

    state.apply_event(&Event::DriverSaved { driver });
    state.apply_event(&Event::TruckSaved { truck });
    assert_eq!(state.drivers["drv-1"].name, "Ana");
    assert_eq!(state.trucks["trk-1"].plate_number, "B-123");

    state.apply_event(&Event::DriverDeleted { id: DriverId::from_string("drv-1") });
    state.apply_event(&Event::TruckDeleted { id: TruckId::from_string("trk-1") });
    assert!(state.drivers.is_empty());
    assert!(state.trucks.is_empty());
}

// ── Prefix lookup ────────────────────────────────────────────────────────────

#[test]
fn get_job_by_unique_prefix() {
    let mut state = MaterializedState::default();
    state.apply_event(&job_saved_event(&Job::builder().id("job-abc123").build()));
    state.apply_event(&job_saved_event(&Job::builder().id("job-abd456").build()));

    assert!(state.get_job("job-abc123").is_some());
    assert_eq!(state.get_job("abc").map(|j| j.id.as_str()), Some("job-abc123"));
    assert_eq!(state.get_job("job-abd").map(|j| j.id.as_str()), Some("job-abd456"));
    // ambiguous
    assert!(state.get_job("ab").is_none());
    assert!(state.get_job("zzz").is_none());
}

// ── Snapshot serialization ───────────────────────────────────────────────────

#[test]
fn serde_roundtrip_then_rebuild_index() {
    let mut state = MaterializedState::default();
    state.apply_event(&job_saved_event(&driver_job("job-1", "drv-1", (10, 0), (12, 0))));

    let json = serde_json::to_string(&state).unwrap();
    let mut restored: MaterializedState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.schedule.len_for(ResourceKind::Driver, "drv-1"), 0);

    restored.rebuild_index();
    let probe = TimeWindow::new(at(11, 0), at(13, 0));
    let hits = restored.find_overlapping(ResourceKind::Driver, "drv-1", None, &probe);
    assert_eq!(hits.len(), 1);
}
