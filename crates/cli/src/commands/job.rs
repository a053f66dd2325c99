// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fj job` - Job scheduling commands

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use serde_json::json;

use fj_core::{Job, JobStatus, StatusHistoryEntry};
use fj_engine::{JobFilter, JobRequest};

use super::{or_dash, Context};
use crate::color;
use crate::output::{format_or_json, handle_list, write_table};
use crate::time::{format_opt_time, format_time, parse_price, parse_time};

#[derive(Args)]
pub struct JobArgs {
    #[command(subcommand)]
    pub command: JobCommand,
}

#[derive(Subcommand)]
pub enum JobCommand {
    /// Create a job, booking its driver and truck for the window
    Create {
        #[command(flatten)]
        fields: JobFields,
    },
    /// Change a job. Flags not given keep their current value.
    Update {
        /// Job ID (supports prefix matching)
        id: String,

        #[command(flatten)]
        fields: JobFields,

        /// Clear a field (can be repeated: --clear driver --clear window)
        #[arg(long, value_enum)]
        clear: Vec<ClearField>,
    },
    /// Set a job's status (OPEN, ASSIGNED, IN_PROGRESS, DONE, CANCELLED)
    Status {
        /// Job ID (supports prefix matching)
        id: String,
        status: String,
    },
    /// Delete a job and its status history
    Delete {
        /// Job ID (supports prefix matching)
        id: String,
    },
    /// Show details of a job
    Show {
        /// Job ID (supports prefix matching)
        id: String,
    },
    /// List jobs ordered by pickup time
    List {
        /// Filter by status
        #[arg(long)]
        status: Option<JobStatus>,

        /// Filter by driver ID (supports prefix matching)
        #[arg(long)]
        driver: Option<String>,

        /// Filter by truck ID (supports prefix matching)
        #[arg(long)]
        truck: Option<String>,
    },
    /// Show a job's status transitions, oldest first
    History {
        /// Job ID (supports prefix matching)
        id: String,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct JobFields {
    /// Short description of the job
    #[arg(long)]
    pub title: Option<String>,

    /// Pickup location
    #[arg(long = "from", value_name = "LOCATION")]
    pub pickup_location: Option<String>,

    /// Dropoff location
    #[arg(long = "to", value_name = "LOCATION")]
    pub dropoff_location: Option<String>,

    /// Pickup time (RFC 3339 or YYYY-MM-DDTHH:MM, UTC)
    #[arg(long, value_parser = parse_time, value_name = "TIME")]
    pub pickup: Option<DateTime<Utc>>,

    /// Dropoff time (RFC 3339 or YYYY-MM-DDTHH:MM, UTC)
    #[arg(long, value_parser = parse_time, value_name = "TIME")]
    pub dropoff: Option<DateTime<Utc>>,

    #[arg(long, value_parser = parse_price)]
    pub price: Option<Decimal>,

    /// Initial or new status (default on create: OPEN)
    #[arg(long)]
    pub status: Option<String>,

    /// Driver ID (supports prefix matching)
    #[arg(long)]
    pub driver: Option<String>,

    /// Truck ID (supports prefix matching)
    #[arg(long)]
    pub truck: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ClearField {
    Driver,
    Truck,
    /// Both pickup and dropoff time
    Window,
    Price,
}

impl JobFields {
    /// Overlay the given flags on `base`.
    pub fn apply(self, mut base: JobRequest) -> JobRequest {
        if let Some(title) = self.title {
            base.title = title;
        }
        if let Some(from) = self.pickup_location {
            base.pickup_location = from;
        }
        if let Some(to) = self.dropoff_location {
            base.dropoff_location = to;
        }
        base.pickup_time = self.pickup.or(base.pickup_time);
        base.dropoff_time = self.dropoff.or(base.dropoff_time);
        base.price = self.price.or(base.price);
        base.status = self.status.or(base.status);
        base.driver_id = self.driver.or(base.driver_id);
        base.truck_id = self.truck.or(base.truck_id);
        base
    }
}

/// The request that would recreate `job` unchanged, status left as-is.
pub fn request_from(job: &Job) -> JobRequest {
    JobRequest {
        title: job.title.clone(),
        pickup_location: job.pickup_location.clone(),
        dropoff_location: job.dropoff_location.clone(),
        pickup_time: job.pickup_time,
        dropoff_time: job.dropoff_time,
        price: job.price,
        status: None,
        driver_id: job.driver_id.as_ref().map(|id| id.to_string()),
        truck_id: job.truck_id.as_ref().map(|id| id.to_string()),
    }
}

fn clear(mut req: JobRequest, fields: &[ClearField]) -> JobRequest {
    for field in fields {
        match field {
            ClearField::Driver => req.driver_id = None,
            ClearField::Truck => req.truck_id = None,
            ClearField::Window => {
                req.pickup_time = None;
                req.dropoff_time = None;
            }
            ClearField::Price => req.price = None,
        }
    }
    req
}

/// Expand driver and truck prefixes to full IDs. Blank references pass
/// through so the scheduler treats them as absent.
fn resolve_refs(ctx: &Context, mut req: JobRequest) -> Result<JobRequest> {
    let fleet = ctx.fleet();
    if let Some(id) = req.driver_id.take() {
        req.driver_id = match id.trim() {
            "" => Some(id),
            prefix => Some(fleet.get_driver(prefix)?.id.to_string()),
        };
    }
    if let Some(id) = req.truck_id.take() {
        req.truck_id = match id.trim() {
            "" => Some(id),
            prefix => Some(fleet.get_truck(prefix)?.id.to_string()),
        };
    }
    Ok(req)
}

pub fn handle(command: JobCommand, ctx: &Context) -> Result<()> {
    let scheduler = &ctx.scheduler;
    match command {
        JobCommand::Create { fields } => {
            let req = resolve_refs(ctx, fields.apply(JobRequest::default()))?;
            let job = scheduler.create_job(req)?;
            format_or_json(ctx.format, &job, || println!("Created job {}", job.id))?;
        }
        JobCommand::Update { id, fields, clear: cleared } => {
            let current = scheduler.get_job(&id)?;
            let req = clear(fields.apply(request_from(&current)), &cleared);
            let req = resolve_refs(ctx, req)?;
            let job = scheduler.update_job(current.id.as_str(), req)?;
            format_or_json(ctx.format, &job, || println!("Updated job {}", job.id))?;
        }
        JobCommand::Status { id, status } => {
            let current = scheduler.get_job(&id)?;
            let job = scheduler.update_status(current.id.as_str(), &status)?;
            format_or_json(ctx.format, &job, || {
                println!(
                    "Job {}: {} -> {}",
                    job.id,
                    color::status(current.status),
                    color::status(job.status)
                )
            })?;
        }
        JobCommand::Delete { id } => {
            let job = scheduler.get_job(&id)?;
            scheduler.delete_job(job.id.as_str())?;
            format_or_json(ctx.format, &json!({ "deleted": job.id }), || {
                println!("Deleted job {}", job.id)
            })?;
        }
        JobCommand::Show { id } => {
            let job = scheduler.get_job(&id)?;
            format_or_json(ctx.format, &job, || print_job(&job))?;
        }
        JobCommand::List { status, driver, truck } => {
            let fleet = ctx.fleet();
            let driver_id = driver.map(|d| fleet.get_driver(&d)).transpose()?.map(|d| d.id);
            let truck_id = truck.map(|t| fleet.get_truck(&t)).transpose()?.map(|t| t.id);
            let filter = JobFilter::default()
                .status(status)
                .driver_id(driver_id.map(|id| id.to_string()))
                .truck_id(truck_id.map(|id| id.to_string()));
            let jobs = scheduler.list_jobs(&filter);
            handle_list(ctx.format, &jobs, "No jobs", write_jobs)?;
        }
        JobCommand::History { id } => {
            let job = scheduler.get_job(&id)?;
            let entries = scheduler.job_history(job.id.as_str())?;
            handle_list(ctx.format, &entries, "No history", write_history)?;
        }
    }
    Ok(())
}

fn print_job(job: &Job) {
    println!("{} {}", color::header("Job:"), job.id);
    println!("  Title:    {}", job.title);
    println!("  Route:    {} -> {}", job.pickup_location, job.dropoff_location);
    println!("  Pickup:   {}", format_opt_time(job.pickup_time));
    println!("  Dropoff:  {}", format_opt_time(job.dropoff_time));
    println!("  Price:    {}", or_dash(job.price));
    println!("  Status:   {}", color::status(job.status));
    println!("  Driver:   {}", or_dash(job.driver_id.as_ref()));
    println!("  Truck:    {}", or_dash(job.truck_id.as_ref()));
    println!("  Created:  {}", color::muted(&format_time(job.created_at)));
}

pub(crate) fn write_jobs(jobs: &[Job], out: &mut dyn Write) -> std::io::Result<()> {
    let rows: Vec<Vec<String>> = jobs
        .iter()
        .map(|job| {
            vec![
                job.id.to_string(),
                job.status.to_string(),
                format_opt_time(job.pickup_time),
                format_opt_time(job.dropoff_time),
                or_dash(job.driver_id.as_ref()),
                or_dash(job.truck_id.as_ref()),
                job.title.clone(),
            ]
        })
        .collect();
    write_table(out, &["ID", "STATUS", "PICKUP", "DROPOFF", "DRIVER", "TRUCK", "TITLE"], &rows)
}

pub(crate) fn write_history(
    entries: &[StatusHistoryEntry],
    out: &mut dyn Write,
) -> std::io::Result<()> {
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| vec![format_time(entry.changed_at), entry.describe()])
        .collect();
    write_table(out, &["CHANGED", "TRANSITION"], &rows)
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
