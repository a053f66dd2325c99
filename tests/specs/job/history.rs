// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status history specs

use crate::prelude::*;
use similar_asserts::assert_eq;

fn transitions(fleet: &Fleet, job: &str) -> Vec<(Option<String>, String)> {
    let json = fleet.fj().args(&["-o", "json", "job", "history", job]).passes().json();
    json.as_array()
        .unwrap()
        .iter()
        .map(|e| (e["from_status"].as_str().map(String::from), e["to_status"].as_str().unwrap().to_string()))
        .collect()
}

#[test]
fn history_records_creation_and_each_change() {
    let fleet = Fleet::new();
    let job = fleet.create_job("Gravel", "08:00", "10:00", &[]);

    fleet.fj().args(&["job", "status", &job, "ASSIGNED"]).passes();
    fleet.fj().args(&["job", "status", &job, "in_progress"]).passes();
    fleet.fj().args(&["job", "status", &job, "DONE"]).passes();

    assert_eq!(
        transitions(&fleet, &job),
        vec![
            (None, "OPEN".to_string()),
            (Some("OPEN".to_string()), "ASSIGNED".to_string()),
            (Some("ASSIGNED".to_string()), "IN_PROGRESS".to_string()),
            (Some("IN_PROGRESS".to_string()), "DONE".to_string()),
        ]
    );
}

#[test]
fn unchanged_status_adds_no_entry() {
    let fleet = Fleet::new();
    let job = fleet.create_job("Gravel", "08:00", "10:00", &[]);

    fleet.fj().args(&["job", "status", &job, "open"]).passes();
    fleet.fj().args(&["job", "update", &job, "--title", "Gravel run"]).passes();

    assert_eq!(transitions(&fleet, &job), vec![(None, "OPEN".to_string())]);
}

#[test]
fn history_text_shows_transitions() {
    let fleet = Fleet::new();
    let job = fleet.create_job("Gravel", "08:00", "10:00", &[]);
    fleet.fj().args(&["job", "status", &job, "CANCELLED"]).passes();

    fleet
        .fj()
        .args(&["job", "history", &job])
        .passes()
        .stdout_has("TRANSITION")
        .stdout_has("created -> OPEN")
        .stdout_has("OPEN -> CANCELLED");
}

#[test]
fn deleting_a_job_removes_its_history() {
    let fleet = Fleet::new();
    let job = fleet.create_job("Gravel", "08:00", "10:00", &[]);

    fleet.fj().args(&["job", "delete", &job]).passes().stdout_has("Deleted job");

    fleet.fj().args(&["job", "history", &job]).fails_with(EXIT_NOT_FOUND);
    fleet.fj().args(&["job", "show", &job]).fails_with(EXIT_NOT_FOUND).stderr_has("job not found");
}

#[test]
fn blank_status_is_invalid() {
    let fleet = Fleet::new();
    let job = fleet.create_job("Gravel", "08:00", "10:00", &[]);

    fleet.fj().args(&["job", "status", &job, " "]).fails_with(EXIT_INVALID);
    assert_eq!(transitions(&fleet, &job).len(), 1);
}
