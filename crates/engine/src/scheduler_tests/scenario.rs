// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end walk through a dispatcher's morning.

use super::*;

#[test]
fn dispatcher_morning() {
    let h = Harness::new();

    // A: driver 1, 10:00-12:00, no status given
    let a = h.create(h.driver_haul(10, 12));
    assert_eq!(a.status, JobStatus::Open);
    let history = h.history(&a);
    assert_eq!(history.len(), 1);
    assert!(history[0].is_creation());

    // B: 11:00-13:00 collides with A
    let err = h.scheduler.create_job(h.driver_haul(11, 13)).unwrap_err();
    expect_conflict(err, ResourceKind::Driver, &a);

    // C: 12:00-13:00 only touches A
    let c = h.create(h.driver_haul(12, 13));

    // A finishes
    h.tick();
    h.scheduler.update_status(&a.id, "DONE").unwrap();
    let history = h.history(&a);
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].from_status, Some(JobStatus::Open));
    assert_eq!(history[1].to_status, JobStatus::Done);

    // B is created without a driver, then given 11:00-13:00 again
    let b = h.create(h.driver_haul(11, 13).driver_id(None));
    assert!(b.driver_id.is_none());
    assert!(h.scheduler.update_job(&b.id, h.driver_haul(11, 13).driver_id(None)).is_ok());

    // C still holds driver 1 from 12:00, so B cannot take the driver back
    let err = h.scheduler.update_job(&b.id, h.driver_haul(11, 13)).unwrap_err();
    expect_conflict(err, ResourceKind::Driver, &c);
}
