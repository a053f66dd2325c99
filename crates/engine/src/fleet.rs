// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Driver and truck registry.
//!
//! Jobs reference resources by id only, so a resource cannot be deleted while
//! any job still books it.

use crate::error::{EntityKind, SchedulerError};
use crate::request::{non_blank, DriverRequest, TruckRequest};
use crate::validate::{validate_driver, validate_truck};
use fj_core::{
    Clock, Driver, DriverId, Job, ResourceKind, SystemClock, Truck, TruckId, DEFAULT_DRIVER_STATUS,
    DEFAULT_TRUCK_STATUS,
};
use fj_storage::{EntityStore, Store, Transaction};
use tracing::info;

#[derive(Clone)]
pub struct Fleet<C: Clock = SystemClock> {
    store: Store,
    clock: C,
}

impl<C: Clock> Fleet<C> {
    pub fn new(store: Store, clock: C) -> Self {
        Self { store, clock }
    }

    // ── Drivers ─────────────────────────────────────────────────────────

    pub fn add_driver(&self, req: DriverRequest) -> Result<Driver, SchedulerError> {
        validate_driver(&req)?;
        let driver = Driver {
            id: DriverId::new(),
            name: req.name.trim().to_string(),
            phone: req.phone,
            email: req.email,
            status: status_or(req.status.as_deref(), DEFAULT_DRIVER_STATUS),
            created_at: self.clock.now(),
        };
        let driver = self.store.transaction(|tx| Ok::<_, SchedulerError>(tx.save_driver(driver)))?;
        info!(driver_id = %driver.id, name = %driver.name, "driver added");
        Ok(driver)
    }

    /// Replace name and contact details; status changes only when given.
    pub fn update_driver(&self, id: &str, req: DriverRequest) -> Result<Driver, SchedulerError> {
        validate_driver(&req)?;
        let driver = self.store.transaction(|tx| {
            let mut driver = tx
                .find_driver(id)
                .ok_or_else(|| SchedulerError::not_found(EntityKind::Driver, id))?;
            driver.name = req.name.trim().to_string();
            driver.phone = req.phone;
            driver.email = req.email;
            driver.status = status_or(req.status.as_deref(), &driver.status);
            Ok::<_, SchedulerError>(tx.save_driver(driver))
        })?;
        info!(driver_id = %driver.id, "driver updated");
        Ok(driver)
    }

    /// Look up a driver by ID or unique ID prefix.
    pub fn get_driver(&self, id: &str) -> Result<Driver, SchedulerError> {
        self.store
            .read(|state| state.get_driver(id).cloned())
            .ok_or_else(|| SchedulerError::not_found(EntityKind::Driver, id))
    }

    /// All drivers, oldest first.
    pub fn list_drivers(&self) -> Vec<Driver> {
        let mut drivers: Vec<Driver> =
            self.store.read(|state| state.drivers.values().cloned().collect());
        drivers.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        drivers
    }

    pub fn delete_driver(&self, id: &str) -> Result<(), SchedulerError> {
        self.store.transaction(|tx| {
            let driver = tx
                .find_driver(id)
                .ok_or_else(|| SchedulerError::not_found(EntityKind::Driver, id))?;
            ensure_unbooked(tx, ResourceKind::Driver, &driver.id)?;
            tx.delete_driver(&driver.id);
            Ok::<_, SchedulerError>(())
        })?;
        info!(driver_id = id, "driver deleted");
        Ok(())
    }

    // ── Trucks ──────────────────────────────────────────────────────────

    pub fn add_truck(&self, req: TruckRequest) -> Result<Truck, SchedulerError> {
        validate_truck(&req)?;
        let truck = self.store.transaction(|tx| {
            let plate_number = req.plate_number.trim().to_string();
            ensure_unique_plate(tx, &plate_number, None)?;
            let truck = Truck {
                id: TruckId::new(),
                plate_number,
                model: req.model,
                capacity_tons: req.capacity_tons,
                status: status_or(req.status.as_deref(), DEFAULT_TRUCK_STATUS),
                created_at: self.clock.now(),
            };
            Ok::<_, SchedulerError>(tx.save_truck(truck))
        })?;
        info!(truck_id = %truck.id, plate = %truck.plate_number, "truck added");
        Ok(truck)
    }

    /// Replace plate, model and capacity; status changes only when given.
    pub fn update_truck(&self, id: &str, req: TruckRequest) -> Result<Truck, SchedulerError> {
        validate_truck(&req)?;
        let truck = self.store.transaction(|tx| {
            let mut truck = tx
                .find_truck(id)
                .ok_or_else(|| SchedulerError::not_found(EntityKind::Truck, id))?;
            let plate_number = req.plate_number.trim().to_string();
            ensure_unique_plate(tx, &plate_number, Some(&truck.id))?;
            truck.plate_number = plate_number;
            truck.model = req.model;
            truck.capacity_tons = req.capacity_tons;
            truck.status = status_or(req.status.as_deref(), &truck.status);
            Ok::<_, SchedulerError>(tx.save_truck(truck))
        })?;
        info!(truck_id = %truck.id, "truck updated");
        Ok(truck)
    }

    /// Look up a truck by ID or unique ID prefix.
    pub fn get_truck(&self, id: &str) -> Result<Truck, SchedulerError> {
        self.store
            .read(|state| state.get_truck(id).cloned())
            .ok_or_else(|| SchedulerError::not_found(EntityKind::Truck, id))
    }

    pub fn list_trucks(&self) -> Vec<Truck> {
        let mut trucks: Vec<Truck> =
            self.store.read(|state| state.trucks.values().cloned().collect());
        trucks.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        trucks
    }

    pub fn delete_truck(&self, id: &str) -> Result<(), SchedulerError> {
        self.store.transaction(|tx| {
            let truck = tx
                .find_truck(id)
                .ok_or_else(|| SchedulerError::not_found(EntityKind::Truck, id))?;
            ensure_unbooked(tx, ResourceKind::Truck, &truck.id)?;
            tx.delete_truck(&truck.id);
            Ok::<_, SchedulerError>(())
        })?;
        info!(truck_id = id, "truck deleted");
        Ok(())
    }
}

fn status_or(requested: Option<&str>, fallback: &str) -> String {
    non_blank(requested).unwrap_or(fallback).to_string()
}

fn ensure_unbooked(
    tx: &Transaction<'_>,
    kind: ResourceKind,
    resource_id: &str,
) -> Result<(), SchedulerError> {
    let booked: Option<Job> =
        tx.all_jobs().into_iter().find(|job| job.resource_id(kind) == Some(resource_id));
    match booked {
        Some(job) => Err(SchedulerError::invalid(format!(
            "{kind} {resource_id} is still assigned to job {}",
            job.id
        ))),
        None => Ok(()),
    }
}

/// Plates compare case-insensitively.
fn ensure_unique_plate(
    tx: &Transaction<'_>,
    plate_number: &str,
    exclude: Option<&TruckId>,
) -> Result<(), SchedulerError> {
    let taken = tx.all_trucks().into_iter().find(|truck| {
        exclude != Some(&truck.id) && truck.plate_number.eq_ignore_ascii_case(plate_number)
    });
    match taken {
        Some(truck) => Err(SchedulerError::invalid(format!(
            "plate number {plate_number} is already registered to truck {}",
            truck.id
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "fleet_tests.rs"]
mod tests;
