// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! State directory specs

use crate::prelude::*;

#[test]
fn state_survives_a_checkpoint() {
    let fleet = Fleet::new();
    let ana = fleet.add_driver("Ana");
    let job = fleet.create_job("Gravel", "08:00", "10:00", &["--driver", &ana]);
    fleet.fj().args(&["job", "status", &job, "ASSIGNED"]).passes();

    let out = fleet.fj().args(&["-o", "json", "store", "checkpoint"]).passes();
    assert_eq!(out.json()["seq"], 3);
    assert!(fleet.path().join("snapshot.json.zst").exists());

    // Bookings are rebuilt from the snapshot
    fleet
        .try_create_job("Sand", "09:00", "11:00", &["--driver", &ana])
        .fails_with(EXIT_CONFLICT);
    fleet.fj().args(&["job", "history", &job]).passes().stdout_has("OPEN -> ASSIGNED");
}

#[test]
fn rejected_commands_write_nothing() {
    let fleet = Fleet::new();
    let ana = fleet.add_driver("Ana");
    fleet.create_job("Gravel", "08:00", "10:00", &["--driver", &ana]);
    let before = std::fs::read_to_string(fleet.path().join("events.wal")).unwrap();

    fleet.try_create_job("Sand", "09:00", "11:00", &["--driver", &ana]).fails_with(EXIT_CONFLICT);
    fleet.try_create_job(" ", "12:00", "13:00", &[]).fails_with(EXIT_INVALID);

    let after = std::fs::read_to_string(fleet.path().join("events.wal")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn automatic_checkpoint_follows_config() {
    let fleet = Fleet::new();
    fleet.file("config.toml", "checkpoint_every = 2\n");

    fleet.add_driver("Ana");
    assert!(!fleet.path().join("snapshot.json.zst").exists());
    fleet.add_driver("Bo");
    assert!(fleet.path().join("snapshot.json.zst").exists());

    fleet.fj().args(&["driver", "list"]).passes().stdout_has("Ana").stdout_has("Bo");
}

#[test]
fn malformed_config_is_invalid() {
    let fleet = Fleet::new();
    fleet.file("config.toml", "strict_windows = \"yes\"\n");

    fleet.fj().args(&["job", "list"]).fails_with(EXIT_INVALID).stderr_has("invalid config");
}

#[test]
fn unusable_state_dir_is_a_failure() {
    let fleet = Fleet::new();
    let file = fleet.path().join("not-a-dir");
    std::fs::write(&file, "").unwrap();

    cli()
        .args(&["--state-dir", file.to_str().unwrap(), "job", "list"])
        .fails_with(EXIT_FAILURE);
}
