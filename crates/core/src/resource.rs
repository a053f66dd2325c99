// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Drivers and trucks: the resources jobs are booked against.
//!
//! Jobs reference resources by ID only; a job never owns the lifecycle of
//! the driver or truck it books.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for a driver.
    pub struct DriverId("drv-");
}

crate::define_id! {
    /// Unique identifier for a truck.
    pub struct TruckId("trk-");
}

pub const DEFAULT_DRIVER_STATUS: &str = "ACTIVE";
pub const DEFAULT_TRUCK_STATUS: &str = "AVAILABLE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    pub id: TruckId,
    pub plate_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_tons: Option<f64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

crate::builder! {
    pub struct DriverBuilder => Driver {
        into {
            id: DriverId = DriverId::new(),
            name: String = "Test Driver",
            status: String = DEFAULT_DRIVER_STATUS,
        }
        set {
            created_at: DateTime<Utc> = crate::test_support::base_time(),
        }
        option {
            phone: String = None,
            email: String = None,
        }
    }
}

crate::builder! {
    pub struct TruckBuilder => Truck {
        into {
            id: TruckId = TruckId::new(),
            plate_number: String = "TEST-001",
            status: String = DEFAULT_TRUCK_STATUS,
        }
        set {
            created_at: DateTime<Utc> = crate::test_support::base_time(),
        }
        option {
            model: String = None,
            capacity_tons: f64 = None,
        }
    }
}
