// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use fj_core::test_support::{at, history_appended_event, job_saved_event};
use fj_core::JobStatus;

fn booked(id: &str, driver: &str, pickup: u32, dropoff: u32) -> Job {
    Job::builder().id(id).driver_id(driver).window(at(pickup, 0), at(dropoff, 0)).build()
}

fn committed() -> MaterializedState {
    let mut state = MaterializedState::default();
    state.apply_event(&job_saved_event(&booked("job-a", "drv-1", 10, 12)));
    state.apply_event(&history_appended_event("job-a", None, JobStatus::Open, at(9, 0)));
    state
}

#[test]
fn reads_fall_through_to_committed_state() {
    let state = committed();
    let tx = Transaction::new(&state);

    assert!(tx.job_exists("job-a"));
    assert!(!tx.job_exists("job-b"));
    assert_eq!(tx.find_history("job-a").len(), 1);
    assert!(tx.events().is_empty());
}

#[test]
fn writes_are_visible_inside_the_transaction_only() {
    let state = committed();
    let mut tx = Transaction::new(&state);

    tx.save_job(booked("job-b", "drv-1", 13, 14));
    tx.delete_job(&JobId::from_string("job-a"));

    assert!(tx.job_exists("job-b"));
    assert!(!tx.job_exists("job-a"));
    let ids: Vec<_> = tx.all_jobs().into_iter().map(|j| j.id.to_string()).collect();
    assert_eq!(ids, vec!["job-b"]);

    assert!(state.jobs.contains_key("job-a"));
    assert!(!state.jobs.contains_key("job-b"));
}

#[test]
fn writes_become_events_in_order() {
    let state = MaterializedState::default();
    let mut tx = Transaction::new(&state);
    let job = booked("job-a", "drv-1", 10, 12);

    tx.save_job(job.clone());
    tx.append_history(StatusHistoryEntry::new(job.id.clone(), None, JobStatus::Open, at(9, 0)));
    tx.delete_history(&job.id);
    tx.delete_job(&job.id);

    let names: Vec<&str> = tx.events().iter().map(Event::name).collect();
    assert_eq!(names, vec!["job:saved", "history:appended", "history:cleared", "job:deleted"]);
}

#[test]
fn overlapping_sees_pending_jobs_and_hides_replaced_ones() {
    let state = committed();
    let mut tx = Transaction::new(&state);
    let probe = TimeWindow::new(at(11, 0), at(13, 30));

    // committed job-a moved out of the probe window
    tx.save_job(booked("job-a", "drv-1", 15, 16));
    tx.save_job(booked("job-b", "drv-1", 13, 14));

    let hits = tx.find_overlapping(ResourceKind::Driver, "drv-1", None, &probe);
    let ids: Vec<_> = hits.iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, vec!["job-b"]);
}

#[test]
fn overlapping_orders_by_pickup() {
    let state = committed();
    let mut tx = Transaction::new(&state);
    tx.save_job(booked("job-early", "drv-1", 8, 11));

    let probe = TimeWindow::new(at(9, 0), at(18, 0));
    let hits = tx.find_overlapping(ResourceKind::Driver, "drv-1", None, &probe);
    let ids: Vec<_> = hits.iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, vec!["job-early", "job-a"]);
}

#[test]
fn history_clear_hides_committed_entries() {
    let state = committed();
    let mut tx = Transaction::new(&state);
    let id = JobId::from_string("job-a");

    tx.delete_history(&id);
    assert!(tx.find_history("job-a").is_empty());

    tx.append_history(StatusHistoryEntry::new(id, None, JobStatus::Open, at(9, 30)));
    assert_eq!(tx.find_history("job-a").len(), 1);
}

#[test]
fn resources_overlay() {
    let state = MaterializedState::default();
    let mut tx = Transaction::new(&state);

    tx.save_driver(Driver::builder().id("drv-1").name("Ana").build());
    tx.save_truck(Truck::builder().id("trk-1").plate_number("B-1").build());
    assert!(tx.find_driver("drv-1").is_some());
    assert!(tx.find_truck("trk-1").is_some());
    assert_eq!(tx.all_drivers().len(), 1);

    tx.delete_driver(&DriverId::from_string("drv-1"));
    tx.delete_truck(&TruckId::from_string("trk-1"));
    assert!(tx.find_driver("drv-1").is_none());
    assert!(tx.all_trucks().is_empty());
}
