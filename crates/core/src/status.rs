// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job status and the resources a job can book.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle status of a transport job.
///
/// Any status may follow any other; there is no enforced transition graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    #[default]
    Open,
    Assigned,
    InProgress,
    Done,
    Cancelled,
}

impl JobStatus {
    /// Statuses that still compete for driver and truck time.
    pub const ACTIVE: [JobStatus; 3] = [JobStatus::Open, JobStatus::Assigned, JobStatus::InProgress];

    pub const ALL: [JobStatus; 5] = [
        JobStatus::Open,
        JobStatus::Assigned,
        JobStatus::InProgress,
        JobStatus::Done,
        JobStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Open => "OPEN",
            JobStatus::Assigned => "ASSIGNED",
            JobStatus::InProgress => "IN_PROGRESS",
            JobStatus::Done => "DONE",
            JobStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn is_active(&self) -> bool {
        Self::ACTIVE.contains(self)
    }

    /// Done and cancelled jobs no longer hold their booking.
    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }
}

crate::simple_display! {
    JobStatus {
        Open => "OPEN",
        Assigned => "ASSIGNED",
        InProgress => "IN_PROGRESS",
        Done => "DONE",
        Cancelled => "CANCELLED",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown job status '{0}' (expected one of OPEN, ASSIGNED, IN_PROGRESS, DONE, CANCELLED)")]
pub struct ParseStatusError(pub String);

impl FromStr for JobStatus {
    type Err = ParseStatusError;

    /// Case-insensitive; surrounding whitespace is ignored and `-` or a space
    /// may stand in for `_` (`in-progress`, `In Progress`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        JobStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// The kind of resource a job books over its time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Driver,
    Truck,
}

crate::simple_display! {
    ResourceKind {
        Driver => "driver",
        Truck => "truck",
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
