// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use fj_core::test_support::strategies::arb_window;
use proptest::prelude::*;

fn overlapping_ids(
    state: &MaterializedState,
    kind: ResourceKind,
    resource: &str,
    exclude: Option<&str>,
    probe: TimeWindow,
) -> Vec<String> {
    let exclude = exclude.map(JobId::from_string);
    let mut ids: Vec<String> = state
        .find_overlapping(kind, resource, exclude.as_ref(), &probe)
        .into_iter()
        .map(|j| j.id.to_string())
        .collect();
    ids.sort();
    ids
}

#[test]
fn finds_overlap_but_not_touching() {
    let mut state = MaterializedState::default();
    state.apply_event(&job_saved_event(&driver_job("job-a", "drv-1", (10, 0), (12, 0))));

    let overlapping = TimeWindow::new(at(11, 0), at(13, 0));
    let touching = TimeWindow::new(at(12, 0), at(13, 0));

    assert_eq!(
        overlapping_ids(&state, ResourceKind::Driver, "drv-1", None, overlapping),
        vec!["job-a"]
    );
    assert!(overlapping_ids(&state, ResourceKind::Driver, "drv-1", None, touching).is_empty());
}

#[test]
fn excludes_the_job_being_edited() {
    let mut state = MaterializedState::default();
    state.apply_event(&job_saved_event(&driver_job("job-a", "drv-1", (10, 0), (12, 0))));

    let probe = TimeWindow::new(at(10, 0), at(12, 0));
    assert!(
        overlapping_ids(&state, ResourceKind::Driver, "drv-1", Some("job-a"), probe).is_empty()
    );
}

#[test]
fn other_resources_and_kinds_do_not_match() {
    let mut state = MaterializedState::default();
    let job = Job::builder()
        .id("job-a")
        .driver_id("drv-1")
        .truck_id("trk-1")
        .window(at(10, 0), at(12, 0))
        .build();
    state.apply_event(&job_saved_event(&job));

    let probe = TimeWindow::new(at(11, 0), at(11, 30));
    assert!(overlapping_ids(&state, ResourceKind::Driver, "drv-2", None, probe).is_empty());
    // a truck id is never looked up as a driver
    assert!(overlapping_ids(&state, ResourceKind::Driver, "trk-1", None, probe).is_empty());
    assert_eq!(overlapping_ids(&state, ResourceKind::Truck, "trk-1", None, probe), vec!["job-a"]);
}

#[test]
fn jobs_without_full_window_are_not_indexed() {
    let mut state = MaterializedState::default();
    let job = Job::builder().id("job-a").driver_id("drv-1").pickup_time(at(10, 0)).build();
    state.apply_event(&job_saved_event(&job));

    assert_eq!(state.schedule.len_for(ResourceKind::Driver, "drv-1"), 0);
}

#[test]
fn reassignment_moves_booking() {
    let mut state = MaterializedState::default();
    let job = driver_job("job-a", "drv-1", (10, 0), (12, 0));
    state.apply_event(&job_saved_event(&job));

    let mut moved = job.clone();
    moved.driver_id = Some(DriverId::from_string("drv-2"));
    moved.pickup_time = Some(at(14, 0));
    moved.dropoff_time = Some(at(15, 0));
    state.apply_event(&job_saved_event(&moved));

    assert_eq!(state.schedule.len_for(ResourceKind::Driver, "drv-1"), 0);
    assert_eq!(state.schedule.len_for(ResourceKind::Driver, "drv-2"), 1);
    let probe = TimeWindow::new(at(14, 30), at(16, 0));
    assert_eq!(overlapping_ids(&state, ResourceKind::Driver, "drv-2", None, probe), vec!["job-a"]);
}

#[test]
fn delete_removes_booking() {
    let mut state = MaterializedState::default();
    state.apply_event(&job_saved_event(&driver_job("job-a", "drv-1", (10, 0), (12, 0))));
    state.apply_event(&job_deleted_event("job-a"));

    assert_eq!(state.schedule.len_for(ResourceKind::Driver, "drv-1"), 0);
}

#[test]
fn status_is_not_filtered_by_the_store() {
    let mut state = MaterializedState::default();
    let mut done = driver_job("job-a", "drv-1", (10, 0), (12, 0));
    done.status = JobStatus::Done;
    state.apply_event(&job_saved_event(&done));

    let probe = TimeWindow::new(at(11, 0), at(13, 0));
    assert_eq!(overlapping_ids(&state, ResourceKind::Driver, "drv-1", None, probe), vec!["job-a"]);
}

proptest! {
    /// The index answers exactly what a linear scan over all jobs answers.
    #[test]
    fn index_matches_linear_scan(
        windows in proptest::collection::vec(arb_window(), 0..24),
        probe in arb_window(),
    ) {
        let mut state = MaterializedState::default();
        for (i, w) in windows.iter().enumerate() {
            let job = Job::builder()
                .id(format!("job-{i:02}"))
                .driver_id(if i % 2 == 0 { "drv-even" } else { "drv-odd" })
                .window(w.pickup, w.dropoff)
                .build();
            state.apply_event(&job_saved_event(&job));
        }

        let mut expected: Vec<String> = state
            .jobs
            .values()
            .filter(|j| j.driver_id.as_deref() == Some("drv-even"))
            .filter(|j| j.window().is_some_and(|w| w.overlaps(&probe)))
            .map(|j| j.id.to_string())
            .collect();
        expected.sort();

        prop_assert_eq!(
            overlapping_ids(&state, ResourceKind::Driver, "drv-even", None, probe),
            expected
        );
    }
}
