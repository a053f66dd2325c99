// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn get_job_accepts_unique_prefix() {
    let h = Harness::new();
    let job = h.create(h.driver_haul(10, 12));

    assert_eq!(h.scheduler.get_job(&job.id).unwrap(), job);
    assert_eq!(h.scheduler.get_job(&job.id.short(8)).unwrap().id, job.id);
    assert_eq!(h.scheduler.get_job(job.id.suffix()).unwrap().id, job.id);
}

#[test]
fn get_missing_job_is_not_found() {
    let h = Harness::new();
    let err = h.scheduler.get_job("job-nope").unwrap_err();
    assert_eq!(err.to_string(), "job not found: job-nope");
}

#[test]
fn list_orders_by_pickup_with_unscheduled_last() {
    let h = Harness::new();
    let late = h.create(h.driver_haul(14, 15));
    h.tick();
    let unscheduled = h.create(JobRequest::new("Later", "A", "B"));
    h.tick();
    let early = h.create(h.driver_haul(9, 10));

    let ids: Vec<JobId> =
        h.scheduler.list_jobs(&JobFilter::default()).into_iter().map(|j| j.id).collect();
    assert_eq!(ids, vec![early.id, late.id, unscheduled.id]);
}

#[test]
fn list_filters_by_status_and_resource() {
    let h = Harness::new();
    let driven = h.create(h.driver_haul(9, 10));
    let trucked = h.create(h.truck_haul(9, 10));
    h.scheduler.update_status(&trucked.id, "DONE").unwrap();

    let by_driver = JobFilter::default().driver_id(Some(h.driver.id.to_string()));
    let by_truck = JobFilter::default().truck_id(Some(h.truck.id.to_string()));
    let done = JobFilter::default().status(Some(JobStatus::Done));
    let open_trucks = by_truck.clone().status(Some(JobStatus::Open));

    let ids = |f: &JobFilter| -> Vec<JobId> {
        h.scheduler.list_jobs(f).into_iter().map(|j| j.id).collect()
    };
    assert_eq!(ids(&by_driver), vec![driven.id.clone()]);
    assert_eq!(ids(&by_truck), vec![trucked.id.clone()]);
    assert_eq!(ids(&done), vec![trucked.id]);
    assert!(ids(&open_trucks).is_empty());
}
