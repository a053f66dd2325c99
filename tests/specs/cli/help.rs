// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs

use crate::prelude::*;

#[test]
fn fj_no_args_shows_usage() {
    cli().fails_with(EXIT_INVALID).stderr_has("Usage:");
}

#[test]
fn fj_help_lists_command_groups() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("job")
        .stdout_has("driver")
        .stdout_has("truck")
        .stdout_has("store");
}

#[test]
fn fj_job_help_shows_subcommands() {
    cli()
        .args(&["job", "--help"])
        .passes()
        .stdout_has("create")
        .stdout_has("update")
        .stdout_has("status")
        .stdout_has("delete")
        .stdout_has("show")
        .stdout_has("list")
        .stdout_has("history");
}

#[test]
fn fj_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    cli().args(&["jobs"]).fails_with(EXIT_INVALID);
}

#[test]
fn malformed_time_is_a_usage_error() {
    let fleet = Fleet::new();
    fleet
        .fj()
        .args(&["job", "create", "--title", "t", "--from", "a", "--to", "b", "--pickup", "9am"])
        .fails_with(EXIT_INVALID)
        .stderr_has("invalid time");
}
