// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mutation requests as callers submit them.
//!
//! Requests carry raw caller input (status as text, references as plain ids);
//! the scheduler validates and resolves them. Update requests replace every
//! field, so an absent driver or truck id clears that reference.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRequest {
    pub title: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    #[serde(default)]
    pub pickup_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub dropoff_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Absent or blank means "keep" on update and `OPEN` on create.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub driver_id: Option<String>,
    #[serde(default)]
    pub truck_id: Option<String>,
}

impl JobRequest {
    pub fn new(
        title: impl Into<String>,
        pickup_location: impl Into<String>,
        dropoff_location: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            pickup_location: pickup_location.into(),
            dropoff_location: dropoff_location.into(),
            ..Self::default()
        }
    }

    fj_core::setters! {
        set {
            pickup_time: Option<DateTime<Utc>>,
            dropoff_time: Option<DateTime<Utc>>,
            price: Option<Decimal>,
            status: Option<String>,
            driver_id: Option<String>,
            truck_id: Option<String>,
        }
    }

    /// Set both ends of the booking window.
    pub fn window(self, pickup: DateTime<Utc>, dropoff: DateTime<Utc>) -> Self {
        self.pickup_time(Some(pickup)).dropoff_time(Some(dropoff))
    }

    pub fn driver(self, id: impl Into<String>) -> Self {
        self.driver_id(Some(id.into()))
    }

    pub fn truck(self, id: impl Into<String>) -> Self {
        self.truck_id(Some(id.into()))
    }

    pub fn with_status(self, status: impl Into<String>) -> Self {
        self.status(Some(status.into()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriverRequest {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Defaults to `ACTIVE`
    #[serde(default)]
    pub status: Option<String>,
}

impl DriverRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    fj_core::setters! {
        set {
            phone: Option<String>,
            email: Option<String>,
            status: Option<String>,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TruckRequest {
    pub plate_number: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub capacity_tons: Option<f64>,
    /// Defaults to `AVAILABLE`
    #[serde(default)]
    pub status: Option<String>,
}

impl TruckRequest {
    pub fn new(plate_number: impl Into<String>) -> Self {
        Self { plate_number: plate_number.into(), ..Self::default() }
    }

    fj_core::setters! {
        set {
            model: Option<String>,
            capacity_tons: Option<f64>,
            status: Option<String>,
        }
    }
}

/// Treat blank text as absent.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
