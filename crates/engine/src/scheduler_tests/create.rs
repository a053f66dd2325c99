// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn create_defaults_to_open_with_creation_history() {
    let h = Harness::new();
    let job = h.create(h.driver_haul(10, 12));

    assert_eq!(job.status, JobStatus::Open);
    assert_eq!(job.created_at, at(8, 0));
    assert_eq!(job.driver_id.as_ref(), Some(&h.driver.id));

    let history = h.history(&job);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].from_status, None);
    assert_eq!(history[0].to_status, JobStatus::Open);
}

#[yare::parameterized(
    blank     = { "  ", JobStatus::Open },
    lowercase = { "assigned", JobStatus::Assigned },
    spaced    = { "In Progress", JobStatus::InProgress },
)]
fn create_status_text(text: &str, expected: JobStatus) {
    let h = Harness::new();
    let job = h.create(h.driver_haul(10, 12).with_status(text));

    assert_eq!(job.status, expected);
    assert_eq!(h.history(&job)[0].to_status, expected);
}

#[test]
fn create_rejects_unknown_status() {
    let h = Harness::new();
    let err = h.scheduler.create_job(h.driver_haul(10, 12).with_status("PAUSED")).unwrap_err();

    assert!(matches!(err, SchedulerError::Validation(_)));
    assert_eq!(h.wal_seq(), 2);
}

#[test]
fn create_with_missing_driver_or_truck_is_not_found() {
    let h = Harness::new();
    let before = h.wal_seq();

    let err = h.scheduler.create_job(h.driver_haul(10, 12).driver("drv-ghost")).unwrap_err();
    assert!(
        matches!(err, SchedulerError::NotFound { kind: EntityKind::Driver, ref id } if id == "drv-ghost")
    );

    let err = h.scheduler.create_job(h.driver_haul(10, 12).truck("trk-ghost")).unwrap_err();
    assert!(matches!(err, SchedulerError::NotFound { kind: EntityKind::Truck, .. }));
    assert!(err.is_client_error());

    assert_eq!(h.wal_seq(), before);
    assert!(h.scheduler.list_jobs(&JobFilter::default()).is_empty());
}

#[test]
fn overlapping_driver_booking_conflicts() {
    let h = Harness::new();
    let a = h.create(h.driver_haul(10, 12));

    let err = h.scheduler.create_job(h.driver_haul(11, 13)).unwrap_err();

    expect_conflict(err, ResourceKind::Driver, &a);
    assert_eq!(h.scheduler.list_jobs(&JobFilter::default()).len(), 1);
}

#[test]
fn overlapping_truck_booking_conflicts() {
    let h = Harness::new();
    let a = h.create(h.truck_haul(10, 12));

    let err = h.scheduler.create_job(h.truck_haul(9, 11)).unwrap_err();

    expect_conflict(err, ResourceKind::Truck, &a);
}

#[test]
fn driver_conflict_is_reported_before_truck_conflict() {
    let h = Harness::new();
    let a = h.create(h.driver_haul(10, 12).truck(h.truck.id.as_str()));

    let err = h.scheduler.create_job(h.driver_haul(10, 12).truck(h.truck.id.as_str())).unwrap_err();

    expect_conflict(err, ResourceKind::Driver, &a);
}

#[test]
fn touching_windows_do_not_conflict() {
    let h = Harness::new();
    h.create(h.driver_haul(10, 12));

    assert!(h.scheduler.create_job(h.driver_haul(12, 13)).is_ok());
    assert!(h.scheduler.create_job(h.driver_haul(8, 10)).is_ok());
}

#[test]
fn half_windows_never_conflict() {
    let h = Harness::new();
    h.create(h.driver_haul(10, 12));

    let pickup_only = h.driver_haul(10, 12).dropoff_time(None);
    let dropoff_only = h.driver_haul(10, 12).pickup_time(None);
    let neither = h.driver_haul(10, 12).pickup_time(None).dropoff_time(None);

    assert!(h.scheduler.create_job(pickup_only).is_ok());
    assert!(h.scheduler.create_job(dropoff_only).is_ok());
    assert!(h.scheduler.create_job(neither).is_ok());
}

#[yare::parameterized(
    done      = { JobStatus::Done },
    cancelled = { JobStatus::Cancelled },
)]
fn terminal_jobs_release_their_booking(status: JobStatus) {
    let h = Harness::new();
    let a = h.create(h.driver_haul(10, 12).truck(h.truck.id.as_str()));
    h.scheduler.update_status(&a.id, status.as_str()).unwrap();

    assert!(h.scheduler.create_job(h.driver_haul(10, 12).truck(h.truck.id.as_str())).is_ok());
}

#[test]
fn strict_windows_reject_reversed_times() {
    let h = Harness::new();
    let err = h.scheduler.create_job(h.driver_haul(12, 10)).unwrap_err();
    assert!(matches!(err, SchedulerError::Validation(_)));
}

#[test]
fn lenient_windows_accept_reversed_times() {
    let h = Harness::with_options(SchedulerOptions { strict_windows: false, ..Default::default() });
    let job = h.create(h.driver_haul(12, 10));
    assert_eq!(job.pickup_time, Some(at(12, 0)));
}

#[test]
fn rejected_create_writes_nothing() {
    let h = Harness::new();
    h.create(h.driver_haul(10, 12));
    let before = h.wal_seq();

    assert!(h.scheduler.create_job(h.driver_haul(11, 12)).is_err());
    assert_eq!(h.wal_seq(), before);
}
