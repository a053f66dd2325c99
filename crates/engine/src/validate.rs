// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request validation.

use crate::error::SchedulerError;
use crate::request::{non_blank, DriverRequest, JobRequest, TruckRequest};
use fj_core::JobStatus;
use rust_decimal::Decimal;

fn require(field: &str, value: &str) -> Result<(), SchedulerError> {
    if value.trim().is_empty() {
        return Err(SchedulerError::invalid(format!("{field} must not be blank")));
    }
    Ok(())
}

/// Field rules for a job request.
///
/// With `strict_windows`, a window with both ends must have pickup strictly
/// before dropoff.
pub fn validate_job(req: &JobRequest, strict_windows: bool) -> Result<(), SchedulerError> {
    require("title", &req.title)?;
    require("pickup_location", &req.pickup_location)?;
    require("dropoff_location", &req.dropoff_location)?;

    if req.price.is_some_and(|p| p < Decimal::ZERO) {
        return Err(SchedulerError::invalid("price must not be negative"));
    }

    if strict_windows {
        if let (Some(pickup), Some(dropoff)) = (req.pickup_time, req.dropoff_time) {
            if pickup >= dropoff {
                return Err(SchedulerError::invalid(format!(
                    "pickup time {} must be before dropoff time {}",
                    pickup.to_rfc3339(),
                    dropoff.to_rfc3339()
                )));
            }
        }
    }
    Ok(())
}

/// Parse optional status text; blank counts as absent.
pub fn parse_status(text: Option<&str>) -> Result<Option<JobStatus>, SchedulerError> {
    Ok(non_blank(text).map(str::parse::<JobStatus>).transpose()?)
}

pub fn validate_driver(req: &DriverRequest) -> Result<(), SchedulerError> {
    require("name", &req.name)
}

pub fn validate_truck(req: &TruckRequest) -> Result<(), SchedulerError> {
    require("plate_number", &req.plate_number)?;
    if req.capacity_tons.is_some_and(|c| !c.is_finite() || c < 0.0) {
        return Err(SchedulerError::invalid("capacity_tons must be a non-negative number"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
