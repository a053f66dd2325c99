// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Black-box specs driving the `fj` binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

#[path = "specs/cli"]
mod cli {
    mod help;
    mod output;
}

#[path = "specs/job"]
mod job {
    mod history;
    mod schedule;
    mod update;
}

#[path = "specs/fleet"]
mod fleet {
    mod registry;
}

#[path = "specs/store"]
mod store {
    mod persistence;
}
