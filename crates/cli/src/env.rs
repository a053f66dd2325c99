// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;

/// Resolve state directory: FJ_STATE_DIR > XDG_STATE_HOME/fj > ~/.local/state/fj
pub fn state_dir() -> Option<PathBuf> {
    if let Some(dir) = non_empty("FJ_STATE_DIR") {
        return Some(PathBuf::from(dir));
    }
    if let Some(xdg) = non_empty("XDG_STATE_HOME") {
        return Some(PathBuf::from(xdg).join("fj"));
    }
    dirs::home_dir().map(|home| home.join(".local/state/fj"))
}

/// Log filter directive from `FJ_LOG` (e.g. `debug`, `fj_engine=trace`).
pub fn log_filter() -> Option<String> {
    non_empty("FJ_LOG")
}

fn non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|s| !s.trim().is_empty())
}
