// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Booking and conflict specs

use crate::prelude::*;

fn staffed() -> (Fleet, String, String) {
    let fleet = Fleet::new();
    let driver = fleet.add_driver("Ana");
    let truck = fleet.add_truck("B-100");
    (fleet, driver, truck)
}

#[test]
fn dispatcher_morning() {
    let (fleet, ana, b100) = staffed();
    let bo = fleet.add_driver("Bo");

    let first = fleet.create_job("Gravel", "08:00", "10:00", &["--driver", &ana, "--truck", &b100]);

    // Ana is busy until ten
    fleet
        .try_create_job("Sand", "09:00", "11:00", &["--driver", &ana])
        .fails_with(EXIT_CONFLICT)
        .stderr_has(&format!("driver {ana} is already booked by job {first}"));

    // Touching windows do not overlap
    fleet.create_job("Sand", "10:00", "12:00", &["--driver", &ana]);

    // Another driver still cannot take the booked truck
    fleet
        .try_create_job("Bricks", "09:30", "10:30", &["--driver", &bo, "--truck", &b100])
        .fails_with(EXIT_CONFLICT)
        .stderr_has(&format!("truck {b100} is already booked by job {first}"));

    // Once the first job is cancelled the slot frees up
    fleet.fj().args(&["job", "status", &first, "cancelled"]).passes();
    fleet.create_job("Bricks", "09:30", "10:00", &["--driver", &bo, "--truck", &b100]);

    let jobs = fleet.fj().args(&["-o", "json", "job", "list"]).passes().json();
    assert_eq!(jobs.as_array().unwrap().len(), 3);
}

#[test]
fn driver_conflict_is_reported_before_truck_conflict() {
    let (fleet, ana, b100) = staffed();
    let first = fleet.create_job("Gravel", "08:00", "10:00", &["--driver", &ana, "--truck", &b100]);

    fleet
        .try_create_job("Sand", "08:30", "09:30", &["--driver", &ana, "--truck", &b100])
        .fails_with(EXIT_CONFLICT)
        .stderr_has(&format!("driver {ana}"))
        .stderr_has(&first);
}

#[test]
fn terminal_jobs_do_not_block() {
    let (fleet, ana, _) = staffed();
    fleet.create_job("Gravel", "08:00", "10:00", &["--driver", &ana, "--status", "DONE"]);

    fleet.create_job("Sand", "08:00", "10:00", &["--driver", &ana]);
}

#[test]
fn unscheduled_jobs_never_conflict() {
    let (fleet, ana, _) = staffed();
    fleet
        .fj()
        .args(&["job", "create", "--title", "Later", "--from", "a", "--to", "b", "--driver", &ana])
        .passes();

    fleet.create_job("Sand", "08:00", "10:00", &["--driver", &ana]);
}

#[test]
fn unknown_driver_is_not_found() {
    let fleet = Fleet::new();
    fleet
        .try_create_job("Gravel", "08:00", "10:00", &["--driver", "drv-missing"])
        .fails_with(EXIT_NOT_FOUND)
        .stderr_has("driver not found: drv-missing");
}

#[test]
fn resources_resolve_by_prefix() {
    let (fleet, ana, b100) = staffed();
    let job = fleet.create_job("Gravel", "08:00", "10:00", &["--driver", &ana[..8], "--truck", &b100[..8]]);

    let json = fleet.fj().args(&["-o", "json", "job", "show", &job]).passes().json();
    assert_eq!(json["driver_id"], ana.as_str());
    assert_eq!(json["truck_id"], b100.as_str());
}

#[yare::parameterized(
    blank_title    = { " ", &[], "title must not be blank" },
    negative_price = { "Gravel", &["--price=-1"], "price must not be negative" },
    bad_status     = { "Gravel", &["--status", "LOST"], "unknown job status" },
)]
fn invalid_requests_are_rejected(title: &str, extra: &[&str], message: &str) {
    let fleet = Fleet::new();
    fleet
        .try_create_job(title, "08:00", "10:00", extra)
        .fails_with(EXIT_INVALID)
        .stderr_has(message);
    fleet.fj().args(&["job", "list"]).passes().stdout_has("No jobs");
}

#[test]
fn inverted_window_is_rejected_by_default() {
    let fleet = Fleet::new();
    fleet
        .try_create_job("Gravel", "10:00", "08:00", &[])
        .fails_with(EXIT_INVALID)
        .stderr_has("must be before dropoff");
}

#[test]
fn inverted_window_is_allowed_when_strict_windows_is_off() {
    let fleet = Fleet::new();
    fleet.file("config.toml", "strict_windows = false\n");

    fleet.create_job("Gravel", "10:00", "08:00", &[]);
}
