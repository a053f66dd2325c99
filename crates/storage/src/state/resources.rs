// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Driver and truck event handlers.

use fj_core::Event;

use super::MaterializedState;

pub(crate) fn apply(state: &mut MaterializedState, event: &Event) {
    match event {
        Event::DriverSaved { driver } => {
            state.drivers.insert(driver.id.to_string(), driver.clone());
        }
        Event::DriverDeleted { id } => {
            state.drivers.remove(id.as_str());
        }
        Event::TruckSaved { truck } => {
            state.trucks.insert(truck.id.to_string(), truck.clone());
        }
        Event::TruckDeleted { id } => {
            state.trucks.remove(id.as_str());
        }
        _ => {}
    }
}
