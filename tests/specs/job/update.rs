// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job update and listing specs

use crate::prelude::*;

#[test]
fn update_keeps_unspecified_fields() {
    let fleet = Fleet::new();
    let ana = fleet.add_driver("Ana");
    let job = fleet.create_job("Gravel", "08:00", "10:00", &["--driver", &ana, "--price", "100"]);

    let json = fleet
        .fj()
        .args(&["-o", "json", "job", "update", &job, "--to", "Quarry"])
        .passes()
        .json();

    assert_eq!(json["title"], "Gravel");
    assert_eq!(json["dropoff_location"], "Quarry");
    assert_eq!(json["driver_id"], ana.as_str());
    assert_eq!(json["price"], "100");
}

#[test]
fn update_can_clear_references() {
    let fleet = Fleet::new();
    let ana = fleet.add_driver("Ana");
    let job = fleet.create_job("Gravel", "08:00", "10:00", &["--driver", &ana]);

    let json = fleet
        .fj()
        .args(&["-o", "json", "job", "update", &job, "--clear", "driver", "--clear", "window"])
        .passes()
        .json();

    assert!(json.get("driver_id").is_none());
    assert!(json.get("pickup_time").is_none());
}

#[test]
fn moving_a_job_onto_a_busy_driver_conflicts() {
    let fleet = Fleet::new();
    let ana = fleet.add_driver("Ana");
    let busy = fleet.create_job("Gravel", "08:00", "10:00", &["--driver", &ana]);
    let other = fleet.create_job("Sand", "12:00", "14:00", &["--driver", &ana]);

    fleet
        .fj()
        .args(&["job", "update", &other, "--pickup", "2026-03-02T09:00"])
        .fails_with(EXIT_CONFLICT)
        .stderr_has(&busy);

    // Rescheduling within its own window does not conflict with itself
    fleet.fj().args(&["job", "update", &busy, "--dropoff", "2026-03-02T09:00"]).passes();
}

#[test]
fn update_accepts_id_prefix() {
    let fleet = Fleet::new();
    let job = fleet.create_job("Gravel", "08:00", "10:00", &[]);

    fleet
        .fj()
        .args(&["job", "update", &job[..9], "--title", "Gravel run"])
        .passes()
        .stdout_has(&format!("Updated job {job}"));
}

#[test]
fn updating_a_missing_job_is_not_found() {
    let fleet = Fleet::new();
    fleet.fj().args(&["job", "update", "job-nope", "--title", "x"]).fails_with(EXIT_NOT_FOUND);
}

#[test]
fn list_filters_and_orders_by_pickup() {
    let fleet = Fleet::new();
    let ana = fleet.add_driver("Ana");
    let late = fleet.create_job("Late", "14:00", "15:00", &["--driver", &ana]);
    let early = fleet.create_job("Early", "07:00", "08:00", &["--driver", &ana]);
    let other = fleet.create_job("Other", "09:00", "10:00", &["--status", "DONE"]);

    let ids = |args: &[&str]| -> Vec<String> {
        let mut full = vec!["-o", "json", "job", "list"];
        full.extend_from_slice(args);
        fleet.fj().args(&full).passes().json().as_array().unwrap().iter()
            .map(|j| j["id"].as_str().unwrap().to_string())
            .collect()
    };

    assert_eq!(ids(&[]), vec![early.clone(), other.clone(), late.clone()]);
    assert_eq!(ids(&["--driver", &ana]), vec![early, late]);
    assert_eq!(ids(&["--status", "done"]), vec![other]);
}
