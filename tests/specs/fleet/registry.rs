// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Driver and truck registry specs

use crate::prelude::*;

#[test]
fn driver_lifecycle() {
    let fleet = Fleet::new();
    let ana = fleet.add_driver("Ana");

    fleet
        .fj()
        .args(&["driver", "show", &ana])
        .passes()
        .stdout_has("Ana")
        .stdout_has("ACTIVE");

    fleet
        .fj()
        .args(&["driver", "update", &ana, "--phone", "555-0100", "--status", "ON_LEAVE"])
        .passes();
    let json = fleet.fj().args(&["-o", "json", "driver", "show", &ana]).passes().json();
    assert_eq!(json["name"], "Ana");
    assert_eq!(json["phone"], "555-0100");
    assert_eq!(json["status"], "ON_LEAVE");

    fleet.fj().args(&["driver", "delete", &ana]).passes();
    fleet.fj().args(&["driver", "show", &ana]).fails_with(EXIT_NOT_FOUND);
}

#[test]
fn drivers_list_oldest_first() {
    let fleet = Fleet::new();
    fleet.add_driver("Ana");
    fleet.add_driver("Bo");

    let json = fleet.fj().args(&["-o", "json", "driver", "list"]).passes().json();
    let names: Vec<&str> =
        json.as_array().unwrap().iter().map(|d| d["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Ana", "Bo"]);
}

#[test]
fn blank_driver_name_is_invalid() {
    let fleet = Fleet::new();
    fleet.fj().args(&["driver", "add", "  "]).fails_with(EXIT_INVALID).stderr_has("name");
}

#[test]
fn booked_resources_cannot_be_deleted() {
    let fleet = Fleet::new();
    let ana = fleet.add_driver("Ana");
    let b100 = fleet.add_truck("B-100");
    let job = fleet.create_job("Gravel", "08:00", "10:00", &["--driver", &ana, "--truck", &b100]);

    fleet.fj().args(&["driver", "delete", &ana]).fails_with(EXIT_INVALID).stderr_has(&job);
    fleet.fj().args(&["truck", "delete", &b100]).fails_with(EXIT_INVALID).stderr_has(&job);

    fleet.fj().args(&["job", "delete", &job]).passes();
    fleet.fj().args(&["driver", "delete", &ana]).passes();
    fleet.fj().args(&["truck", "delete", &b100]).passes();
}

#[test]
fn truck_lifecycle() {
    let fleet = Fleet::new();
    let truck = fleet.add_truck("B-100");

    fleet
        .fj()
        .args(&["truck", "update", &truck, "--model", "Volvo FH", "--capacity", "18.5"])
        .passes();

    fleet
        .fj()
        .args(&["truck", "show", &truck])
        .passes()
        .stdout_has("B-100")
        .stdout_has("Volvo FH")
        .stdout_has("18.5 t")
        .stdout_has("AVAILABLE");
}

#[test]
fn plate_numbers_are_unique_ignoring_case() {
    let fleet = Fleet::new();
    fleet.add_truck("B-100");

    fleet
        .fj()
        .args(&["truck", "add", "b-100"])
        .fails_with(EXIT_INVALID)
        .stderr_has("already registered");

    // Keeping its own plate is not a duplicate
    let other = fleet.add_truck("C-200");
    fleet.fj().args(&["truck", "update", &other, "--plate", "c-200"]).passes();
}

#[test]
fn negative_capacity_is_invalid() {
    let fleet = Fleet::new();
    fleet.fj().args(&["truck", "add", "B-100", "--capacity=-2"]).fails_with(EXIT_INVALID);
}
