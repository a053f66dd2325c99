// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::request::JobRequest;
use crate::scheduler::Scheduler;
use fj_core::test_support::at;
use fj_core::FakeClock;

fn setup() -> (Scheduler<FakeClock>, Fleet<FakeClock>) {
    let scheduler = Scheduler::new(Store::in_memory(), FakeClock::at(at(7, 0)));
    let fleet = scheduler.fleet();
    (scheduler, fleet)
}

// ── Drivers ─────────────────────────────────────────────────────────────

#[test]
fn add_driver_defaults_status() {
    let (_, fleet) = setup();
    let driver = fleet
        .add_driver(DriverRequest::new("  Ana  ").phone(Some("+40 700 000 000".into())))
        .unwrap();

    assert!(driver.id.starts_with("drv-"));
    assert_eq!(driver.name, "Ana");
    assert_eq!(driver.status, DEFAULT_DRIVER_STATUS);
    assert_eq!(driver.created_at, at(7, 0));
    assert_eq!(fleet.get_driver(&driver.id).unwrap(), driver);
}

#[test]
fn update_driver_replaces_contact_details() {
    let (_, fleet) = setup();
    let driver = fleet
        .add_driver(DriverRequest::new("Ana").email(Some("ana@example.com".into())))
        .unwrap();

    let updated = fleet
        .update_driver(&driver.id, DriverRequest::new("Ana Pop").status(Some("ON_LEAVE".into())))
        .unwrap();
    assert_eq!(updated.name, "Ana Pop");
    assert_eq!(updated.email, None);
    assert_eq!(updated.status, "ON_LEAVE");

    let kept = fleet.update_driver(&driver.id, DriverRequest::new("Ana Pop")).unwrap();
    assert_eq!(kept.status, "ON_LEAVE");
}

#[test]
fn missing_driver_is_not_found() {
    let (_, fleet) = setup();
    assert!(matches!(
        fleet.update_driver("drv-none", DriverRequest::new("X")).unwrap_err(),
        SchedulerError::NotFound { kind: EntityKind::Driver, .. }
    ));
    assert!(fleet.get_driver("drv-none").is_err());
    assert!(fleet.delete_driver("drv-none").is_err());
}

#[test]
fn booked_driver_cannot_be_deleted() {
    let (scheduler, fleet) = setup();
    let driver = fleet.add_driver(DriverRequest::new("Ana")).unwrap();
    let job = scheduler
        .create_job(JobRequest::new("Haul", "A", "B").driver(driver.id.as_str()))
        .unwrap();

    let err = fleet.delete_driver(&driver.id).unwrap_err();
    assert!(matches!(err, SchedulerError::Validation(ref msg) if msg.contains(job.id.as_str())));

    scheduler.delete_job(&job.id).unwrap();
    fleet.delete_driver(&driver.id).unwrap();
    assert!(fleet.list_drivers().is_empty());
}

#[test]
fn drivers_list_oldest_first() {
    let clock = FakeClock::at(at(7, 0));
    let fleet = Fleet::new(Store::in_memory(), clock.clone());
    let first = fleet.add_driver(DriverRequest::new("First")).unwrap();
    clock.advance(std::time::Duration::from_secs(1));
    let second = fleet.add_driver(DriverRequest::new("Second")).unwrap();

    let names: Vec<_> = fleet.list_drivers().into_iter().map(|d| d.id).collect();
    assert_eq!(names, vec![first.id, second.id]);
}

// ── Trucks ──────────────────────────────────────────────────────────────

#[test]
fn add_truck_defaults_status() {
    let (_, fleet) = setup();
    let truck = fleet
        .add_truck(TruckRequest::new("B-100-XYZ").model(Some("Actros".into())))
        .unwrap();

    assert!(truck.id.starts_with("trk-"));
    assert_eq!(truck.status, DEFAULT_TRUCK_STATUS);
    assert_eq!(truck.model.as_deref(), Some("Actros"));
}

#[yare::parameterized(
    exact      = { "B-100" },
    lowercase  = { "b-100" },
    padded     = { "  B-100 " },
)]
fn plate_numbers_are_unique(plate: &str) {
    let (_, fleet) = setup();
    fleet.add_truck(TruckRequest::new("B-100")).unwrap();

    let err = fleet.add_truck(TruckRequest::new(plate)).unwrap_err();
    assert!(matches!(err, SchedulerError::Validation(_)));
    assert_eq!(fleet.list_trucks().len(), 1);
}

#[test]
fn truck_may_keep_its_own_plate_on_update() {
    let (_, fleet) = setup();
    let truck = fleet.add_truck(TruckRequest::new("B-100")).unwrap();
    let other = fleet.add_truck(TruckRequest::new("B-200")).unwrap();

    let updated = fleet
        .update_truck(&truck.id, TruckRequest::new("b-100").capacity_tons(Some(18.0)))
        .unwrap();
    assert_eq!(updated.plate_number, "b-100");
    assert_eq!(updated.capacity_tons, Some(18.0));

    let err = fleet.update_truck(&other.id, TruckRequest::new("B-100")).unwrap_err();
    assert!(matches!(err, SchedulerError::Validation(_)));
}

#[test]
fn booked_truck_cannot_be_deleted() {
    let (scheduler, fleet) = setup();
    let truck = fleet.add_truck(TruckRequest::new("B-100")).unwrap();
    scheduler
        .create_job(JobRequest::new("Haul", "A", "B").truck(truck.id.as_str()))
        .unwrap();

    assert!(matches!(
        fleet.delete_truck(&truck.id).unwrap_err(),
        SchedulerError::Validation(_)
    ));
    assert!(fleet.get_truck(truck.id.short(6)).is_ok());
}
