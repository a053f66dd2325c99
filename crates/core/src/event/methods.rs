// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event methods: name, log summary

use super::Event;

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::DriverSaved { .. } => "driver:saved",
            Event::DriverDeleted { .. } => "driver:deleted",
            Event::TruckSaved { .. } => "truck:saved",
            Event::TruckDeleted { .. } => "truck:deleted",
            Event::JobSaved { .. } => "job:saved",
            Event::JobDeleted { .. } => "job:deleted",
            Event::HistoryAppended { .. } => "history:appended",
            Event::HistoryCleared { .. } => "history:cleared",
        }
    }

    /// One-line description for tracing output.
    pub fn log_summary(&self) -> String {
        let t = self.name();
        match self {
            Event::DriverSaved { driver } => {
                format!("{t} id={} name={} status={}", driver.id, driver.name, driver.status)
            }
            Event::DriverDeleted { id } => format!("{t} id={id}"),
            Event::TruckSaved { truck } => {
                format!("{t} id={} plate={} status={}", truck.id, truck.plate_number, truck.status)
            }
            Event::TruckDeleted { id } => format!("{t} id={id}"),
            Event::JobSaved { job } => {
                let mut s = format!("{t} id={} status={}", job.id, job.status);
                if let Some(window) = job.window() {
                    s.push_str(&format!(" window={window}"));
                }
                if let Some(driver) = &job.driver_id {
                    s.push_str(&format!(" driver={driver}"));
                }
                if let Some(truck) = &job.truck_id {
                    s.push_str(&format!(" truck={truck}"));
                }
                s
            }
            Event::JobDeleted { id } => format!("{t} id={id}"),
            Event::HistoryAppended { entry } => {
                format!("{t} job={} {}", entry.job_id, entry.describe())
            }
            Event::HistoryCleared { job_id } => format!("{t} job={job_id}"),
        }
    }
}
