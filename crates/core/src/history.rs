// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status history entries: the append-only record of a job's transitions.

use crate::job::JobId;
use crate::status::JobStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for a status history entry.
    pub struct HistoryId("hst-");
}

/// One recorded status transition. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusHistoryEntry {
    pub id: HistoryId,
    pub job_id: JobId,
    /// `None` marks the entry written when the job was created.
    pub from_status: Option<JobStatus>,
    pub to_status: JobStatus,
    pub changed_at: DateTime<Utc>,
}

impl StatusHistoryEntry {
    pub fn new(
        job_id: JobId,
        from_status: Option<JobStatus>,
        to_status: JobStatus,
        changed_at: DateTime<Utc>,
    ) -> Self {
        Self { id: HistoryId::new(), job_id, from_status, to_status, changed_at }
    }

    pub fn is_creation(&self) -> bool {
        self.from_status.is_none()
    }

    /// `created -> OPEN`, `OPEN -> DONE`
    pub fn describe(&self) -> String {
        match self.from_status {
            Some(from) => format!("{from} -> {}", self.to_status),
            None => format!("created -> {}", self.to_status),
        }
    }
}
