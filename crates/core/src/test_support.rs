// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{Event, Job, JobId, JobStatus, StatusHistoryEntry};
use chrono::{DateTime, TimeZone, Utc};

// ── Time helpers ────────────────────────────────────────────────────────

/// Midnight of the fixed test day (2026-03-02, UTC).
pub fn base_time() -> DateTime<Utc> {
    at(0, 0)
}

/// `hour:minute` on the fixed test day.
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, hour, minute, 0).single().unwrap_or_default()
}

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for core scheduling types.
pub mod strategies {
    use crate::job::TimeWindow;
    use crate::status::JobStatus;
    use chrono::TimeDelta;
    use proptest::prelude::*;

    pub fn arb_status() -> impl Strategy<Value = JobStatus> {
        prop_oneof![
            Just(JobStatus::Open),
            Just(JobStatus::Assigned),
            Just(JobStatus::InProgress),
            Just(JobStatus::Done),
            Just(JobStatus::Cancelled),
        ]
    }

    /// Well-ordered windows within a two-day span, minute resolution.
    pub fn arb_window() -> impl Strategy<Value = TimeWindow> {
        (0i64..2 * 24 * 60, 1i64..12 * 60).prop_map(|(start, len)| {
            let pickup = super::base_time() + TimeDelta::minutes(start);
            TimeWindow::new(pickup, pickup + TimeDelta::minutes(len))
        })
    }
}

// ── Event factory functions ─────────────────────────────────────────────

pub fn job_saved_event(job: &Job) -> Event {
    Event::JobSaved { job: job.clone() }
}

pub fn job_deleted_event(id: &str) -> Event {
    Event::JobDeleted { id: JobId::from_string(id) }
}

pub fn history_appended_event(
    job_id: &str,
    from: Option<JobStatus>,
    to: JobStatus,
    changed_at: DateTime<Utc>,
) -> Event {
    Event::HistoryAppended {
        entry: StatusHistoryEntry::new(JobId::from_string(job_id), from, to, changed_at),
    }
}

pub fn history_cleared_event(job_id: &str) -> Event {
    Event::HistoryCleared { job_id: JobId::from_string(job_id) }
}
