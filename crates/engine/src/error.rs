// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scheduler error kinds

use fj_core::{JobId, ParseStatusError, ResourceKind};
use fj_storage::StoreError;
use thiserror::Error;

/// What a [`SchedulerError::NotFound`] was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Job,
    Driver,
    Truck,
}

fj_core::simple_display! {
    EntityKind {
        Job => "job",
        Driver => "driver",
        Truck => "truck",
    }
}

impl From<ResourceKind> for EntityKind {
    fn from(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Driver => EntityKind::Driver,
            ResourceKind::Truck => EntityKind::Truck,
        }
    }
}

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    #[error("invalid request: {0}")]
    Validation(String),

    #[error("scheduling conflict: {resource} {resource_id} is already booked by job {blocking_job}")]
    Conflict { resource: ResourceKind, resource_id: String, blocking_job: JobId },

    #[error("storage fault: {0}")]
    Storage(#[from] StoreError),
}

impl SchedulerError {
    pub(crate) fn not_found(kind: impl Into<EntityKind>, id: impl Into<String>) -> Self {
        Self::NotFound { kind: kind.into(), id: id.into() }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// The caller sent something it can fix: a missing entity, an invalid
    /// field, or a booking that collides. Storage faults are not.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}

impl From<ParseStatusError> for SchedulerError {
    fn from(e: ParseStatusError) -> Self {
        Self::Validation(e.to_string())
    }
}
