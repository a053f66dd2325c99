// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Text and JSON rendering specs

use crate::prelude::*;

#[test]
fn empty_lists_print_a_message() {
    let fleet = Fleet::new();
    fleet.fj().args(&["job", "list"]).passes().stdout_has("No jobs");
    fleet.fj().args(&["driver", "list"]).passes().stdout_has("No drivers");
    fleet.fj().args(&["truck", "list"]).passes().stdout_has("No trucks");
}

#[test]
fn empty_list_as_json_is_an_empty_array() {
    let fleet = Fleet::new();
    let out = fleet.fj().args(&["-o", "json", "job", "list"]).passes();
    assert_eq!(out.json(), serde_json::json!([]));
}

#[test]
fn job_show_text_has_every_field() {
    let fleet = Fleet::new();
    let job = fleet.create_job("Haul gravel", "08:00", "10:00", &["--price", "250.50"]);

    fleet
        .fj()
        .args(&["job", "show", &job])
        .passes()
        .stdout_has(&format!("Job: {job}"))
        .stdout_has("Haul gravel")
        .stdout_has("Yard -> Site")
        .stdout_has("2026-03-02 08:00")
        .stdout_has("2026-03-02 10:00")
        .stdout_has("250.50")
        .stdout_has("OPEN");
}

#[test]
fn job_json_uses_wire_status_names() {
    let fleet = Fleet::new();
    let job = fleet.create_job("Haul", "08:00", "10:00", &["--status", "in-progress"]);

    let out = fleet.fj().args(&["-o", "json", "job", "show", &job]).passes();
    let json = out.json();
    assert_eq!(json["status"], "IN_PROGRESS");
    assert_eq!(json["pickup_time"], "2026-03-02T08:00:00Z");
}

#[test]
fn state_dir_flag_overrides_environment() {
    let fleet = Fleet::new();
    let other = Fleet::new();
    let path = other.path().to_str().unwrap();

    fleet.fj().args(&["--state-dir", path, "driver", "add", "Ana"]).passes();

    other.fj().args(&["driver", "list"]).passes().stdout_has("Ana");
    fleet.fj().args(&["driver", "list"]).passes().stdout_has("No drivers");
}
