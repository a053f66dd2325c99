// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn history_appends_in_order() {
    let mut state = MaterializedState::default();
    state.apply_event(&history_appended_event("job-1", None, JobStatus::Open, at(9, 0)));
    state.apply_event(&history_appended_event(
        "job-1",
        Some(JobStatus::Open),
        JobStatus::Assigned,
        at(9, 5),
    ));

    let entries = state.history_for("job-1");
    assert_eq!(entries.len(), 2);
    assert!(entries[0].is_creation());
    assert_eq!(entries[1].to_status, JobStatus::Assigned);
}

#[test]
fn history_for_sorts_by_changed_at_keeping_append_order_on_ties() {
    let mut state = MaterializedState::default();
    state.apply_event(&history_appended_event("job-1", None, JobStatus::Open, at(9, 30)));
    state.apply_event(&history_appended_event(
        "job-1",
        Some(JobStatus::Open),
        JobStatus::Assigned,
        at(9, 0),
    ));
    state.apply_event(&history_appended_event(
        "job-1",
        Some(JobStatus::Assigned),
        JobStatus::Done,
        at(9, 0),
    ));

    let statuses: Vec<JobStatus> =
        state.history_for("job-1").into_iter().map(|e| e.to_status).collect();
    assert_eq!(statuses, vec![JobStatus::Assigned, JobStatus::Done, JobStatus::Open]);
}

#[test]
fn history_append_is_idempotent_by_entry_id() {
    let mut state = MaterializedState::default();
    let event = history_appended_event("job-1", None, JobStatus::Open, at(9, 0));
    state.apply_event(&event);
    state.apply_event(&event);

    assert_eq!(state.history_for("job-1").len(), 1);
}

#[test]
fn history_cleared_removes_all_entries() {
    let mut state = MaterializedState::default();
    state.apply_event(&history_appended_event("job-1", None, JobStatus::Open, at(9, 0)));
    state.apply_event(&history_appended_event("job-2", None, JobStatus::Open, at(9, 0)));
    state.apply_event(&history_cleared_event("job-1"));

    assert!(state.history_for("job-1").is_empty());
    assert_eq!(state.history_for("job-2").len(), 1);
}
