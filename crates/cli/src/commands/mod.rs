// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod driver;
pub mod job;
pub mod store;
pub mod truck;

use crate::output::OutputFormat;
use fj_core::SystemClock;
use fj_engine::{Fleet, Scheduler};

/// What every command handler runs against.
pub struct Context {
    pub scheduler: Scheduler<SystemClock>,
    pub format: OutputFormat,
}

impl Context {
    pub fn fleet(&self) -> Fleet<SystemClock> {
        self.scheduler.fleet()
    }
}

/// `-` for absent optional values in text output.
pub(crate) fn or_dash(value: Option<impl ToString>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
