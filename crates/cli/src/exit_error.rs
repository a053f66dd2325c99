// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom error type that carries a process exit code.
//!
//! Commands return errors instead of calling `std::process::exit()`
//! directly; `main()` classifies them into an `ExitError` and terminates.

use crate::config::ConfigError;
use fj_engine::SchedulerError;
use fj_storage::StoreError;
use std::fmt;

/// Storage faults and anything unexpected
pub const EXIT_FAILURE: i32 = 1;
/// Invalid input, including clap usage errors
pub const EXIT_INVALID: i32 = 2;
pub const EXIT_CONFLICT: i32 = 3;
pub const EXIT_NOT_FOUND: i32 = 4;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// Pick the exit code for an error coming out of a command.
    pub fn classify(err: &anyhow::Error) -> Self {
        if let Some(exit) = err.downcast_ref::<ExitError>() {
            return Self::new(exit.code, exit.message.clone());
        }
        if let Some(e) = err.downcast_ref::<SchedulerError>() {
            return Self::from(e);
        }
        Self::new(EXIT_FAILURE, format!("{err:#}"))
    }
}

impl From<&SchedulerError> for ExitError {
    fn from(e: &SchedulerError) -> Self {
        let code = match e {
            SchedulerError::NotFound { .. } => EXIT_NOT_FOUND,
            SchedulerError::Validation(_) => EXIT_INVALID,
            SchedulerError::Conflict { .. } => EXIT_CONFLICT,
            SchedulerError::Storage(_) => EXIT_FAILURE,
        };
        Self::new(code, e.to_string())
    }
}

impl From<StoreError> for ExitError {
    fn from(e: StoreError) -> Self {
        Self::new(EXIT_FAILURE, e.to_string())
    }
}

impl From<ConfigError> for ExitError {
    fn from(e: ConfigError) -> Self {
        let code = match e {
            ConfigError::Read(..) => EXIT_FAILURE,
            ConfigError::Parse(..) => EXIT_INVALID,
        };
        Self::new(code, e.to_string())
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
