// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

// ── update_job ──────────────────────────────────────────────────────────

#[test]
fn update_replaces_every_field() {
    let h = Harness::new();
    let job = h.create(
        h.driver_haul(10, 12).truck(h.truck.id.as_str()).price(Some(rust_decimal::Decimal::ONE)),
    );

    let req = JobRequest::new("Renamed", "Port", "Warehouse").window(at(14, 0), at(15, 0));
    let updated = h.scheduler.update_job(&job.id, req).unwrap();

    assert_eq!(updated.id, job.id);
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.pickup_location, "Port");
    assert_eq!(updated.pickup_time, Some(at(14, 0)));
    assert_eq!(updated.price, None);
    assert_eq!(updated.driver_id, None);
    assert_eq!(updated.truck_id, None);
    assert_eq!(updated.created_at, job.created_at);
    assert_eq!(updated.status, JobStatus::Open);
}

#[test]
fn update_without_status_change_records_nothing() {
    let h = Harness::new();
    let job = h.create(h.driver_haul(10, 12));

    h.scheduler.update_job(&job.id, h.driver_haul(10, 11).with_status("")).unwrap();
    h.scheduler.update_job(&job.id, h.driver_haul(10, 11).with_status("open")).unwrap();

    assert_eq!(h.history(&job).len(), 1);
}

#[test]
fn update_with_status_records_transition() {
    let h = Harness::new();
    let job = h.create(h.driver_haul(10, 12));
    h.tick();

    let updated =
        h.scheduler.update_job(&job.id, h.driver_haul(10, 12).with_status("ASSIGNED")).unwrap();

    assert_eq!(updated.status, JobStatus::Assigned);
    let history = h.history(&job);
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].describe(), "OPEN -> ASSIGNED");
    assert!(history[0].changed_at < history[1].changed_at);
}

#[test]
fn update_does_not_conflict_with_itself() {
    let h = Harness::new();
    let job = h.create(h.driver_haul(10, 12));

    assert!(h.scheduler.update_job(&job.id, h.driver_haul(11, 13)).is_ok());
}

#[test]
fn update_into_another_booking_conflicts() {
    let h = Harness::new();
    let a = h.create(h.driver_haul(10, 12));
    let b = h.create(h.driver_haul(13, 14));

    let err = h.scheduler.update_job(&b.id, h.driver_haul(11, 13)).unwrap_err();

    expect_conflict(err, ResourceKind::Driver, &a);
    assert_eq!(h.scheduler.get_job(&b.id).unwrap().pickup_time, Some(at(13, 0)));
}

#[test]
fn clearing_driver_frees_the_slot() {
    let h = Harness::new();
    let a = h.create(h.driver_haul(10, 12));
    let unassigned = h.driver_haul(10, 12).driver_id(None);
    h.scheduler.update_job(&a.id, unassigned).unwrap();

    assert!(h.scheduler.create_job(h.driver_haul(10, 12)).is_ok());
}

#[test]
fn update_missing_job_is_not_found() {
    let h = Harness::new();
    let err = h.scheduler.update_job("job-missing", h.driver_haul(10, 12)).unwrap_err();
    assert!(matches!(err, SchedulerError::NotFound { kind: EntityKind::Job, .. }));
}

#[test]
fn update_with_missing_truck_is_not_found_and_keeps_job() {
    let h = Harness::new();
    let job = h.create(h.driver_haul(10, 12));

    let err = h.scheduler.update_job(&job.id, h.driver_haul(10, 12).truck("trk-gone")).unwrap_err();

    assert!(matches!(err, SchedulerError::NotFound { kind: EntityKind::Truck, .. }));
    assert_eq!(h.scheduler.get_job(&job.id).unwrap(), job);
}

// ── update_status ───────────────────────────────────────────────────────

#[test]
fn status_change_is_recorded_once() {
    let h = Harness::new();
    let job = h.create(h.driver_haul(10, 12));
    h.tick();

    let done = h.scheduler.update_status(&job.id, "done").unwrap();
    h.scheduler.update_status(&job.id, "DONE").unwrap();

    assert_eq!(done.status, JobStatus::Done);
    let history = h.history(&job);
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].from_status, Some(JobStatus::Open));
    assert_eq!(history[1].to_status, JobStatus::Done);
}

#[test]
fn any_status_may_follow_any_other() {
    let h = Harness::new();
    let job = h.create(h.driver_haul(10, 12));

    for status in ["DONE", "OPEN", "CANCELLED", "IN_PROGRESS"] {
        h.scheduler.update_status(&job.id, status).unwrap();
    }
    assert_eq!(h.history(&job).len(), 5);
}

#[test]
fn status_change_skips_conflict_check() {
    let h = Harness::with_options(SchedulerOptions {
        policy: ConflictPolicy::new(JobStatus::ACTIVE),
        ..Default::default()
    });
    let a = h.create(h.driver_haul(10, 12).with_status("DONE"));
    h.create(h.driver_haul(10, 12));

    // Reactivating a released booking is allowed; only window edits are checked
    assert!(h.scheduler.update_status(&a.id, "OPEN").is_ok());
}

#[yare::parameterized(
    blank   = { " " },
    unknown = { "LOST" },
)]
fn invalid_status_is_rejected(text: &str) {
    let h = Harness::new();
    let job = h.create(h.driver_haul(10, 12));

    let err = h.scheduler.update_status(&job.id, text).unwrap_err();
    assert!(matches!(err, SchedulerError::Validation(_)));
}

#[yare::parameterized(
    valid   = { "DONE" },
    blank   = { " " },
    unknown = { "LOST" },
)]
fn status_of_missing_job_is_not_found(text: &str) {
    let h = Harness::new();
    let err = h.scheduler.update_status("job-missing", text).unwrap_err();
    assert!(matches!(err, SchedulerError::NotFound { kind: EntityKind::Job, .. }));
}

// ── delete_job / job_history ────────────────────────────────────────────

#[test]
fn delete_removes_job_and_history() {
    let h = Harness::new();
    let job = h.create(h.driver_haul(10, 12));
    h.scheduler.update_status(&job.id, "DONE").unwrap();

    h.scheduler.delete_job(&job.id).unwrap();

    assert!(matches!(
        h.scheduler.job_history(&job.id).unwrap_err(),
        SchedulerError::NotFound { kind: EntityKind::Job, .. }
    ));
    assert!(h.scheduler.store().read(|s| s.history_for(&job.id).is_empty()));
    assert!(h.scheduler.get_job(&job.id).is_err());
}

#[test]
fn delete_is_one_transaction() {
    let h = Harness::new();
    let job = h.create(h.driver_haul(10, 12));
    let before = h.wal_seq();

    h.scheduler.delete_job(&job.id).unwrap();

    assert_eq!(h.wal_seq(), before + 1);
}

#[test]
fn delete_frees_the_slot() {
    let h = Harness::new();
    let job = h.create(h.driver_haul(10, 12));
    h.scheduler.delete_job(&job.id).unwrap();

    assert!(h.scheduler.create_job(h.driver_haul(10, 12)).is_ok());
}

#[test]
fn delete_missing_job_is_not_found() {
    let h = Harness::new();
    assert!(matches!(
        h.scheduler.delete_job("job-missing").unwrap_err(),
        SchedulerError::NotFound { .. }
    ));
}
