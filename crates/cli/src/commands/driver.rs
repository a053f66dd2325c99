// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fj driver` - Driver registry commands

use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::json;

use fj_core::Driver;
use fj_engine::DriverRequest;

use super::{or_dash, Context};
use crate::color;
use crate::output::{format_or_json, handle_list, write_table};
use crate::time::format_time;

#[derive(Args)]
pub struct DriverArgs {
    #[command(subcommand)]
    pub command: DriverCommand,
}

#[derive(Subcommand)]
pub enum DriverCommand {
    /// Register a driver
    Add {
        name: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Free-form status (default: ACTIVE)
        #[arg(long)]
        status: Option<String>,
    },
    /// Change a driver. Flags not given keep their current value.
    Update {
        /// Driver ID (supports prefix matching)
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Show details of a driver
    Show {
        /// Driver ID (supports prefix matching)
        id: String,
    },
    /// List drivers, oldest first
    List {},
    /// Remove a driver no job is booked with
    Delete {
        /// Driver ID (supports prefix matching)
        id: String,
    },
}

pub fn handle(command: DriverCommand, ctx: &Context) -> Result<()> {
    let fleet = ctx.fleet();
    match command {
        DriverCommand::Add { name, phone, email, status } => {
            let req = DriverRequest::new(name).phone(phone).email(email).status(status);
            let driver = fleet.add_driver(req)?;
            format_or_json(ctx.format, &driver, || println!("Added driver {}", driver.id))?;
        }
        DriverCommand::Update { id, name, phone, email, status } => {
            let current = fleet.get_driver(&id)?;
            let req = DriverRequest::new(name.unwrap_or_else(|| current.name.clone()))
                .phone(phone.or_else(|| current.phone.clone()))
                .email(email.or_else(|| current.email.clone()))
                .status(status);
            let driver = fleet.update_driver(current.id.as_str(), req)?;
            format_or_json(ctx.format, &driver, || println!("Updated driver {}", driver.id))?;
        }
        DriverCommand::Show { id } => {
            let driver = fleet.get_driver(&id)?;
            format_or_json(ctx.format, &driver, || print_driver(&driver))?;
        }
        DriverCommand::List {} => {
            let drivers = fleet.list_drivers();
            handle_list(ctx.format, &drivers, "No drivers", write_drivers)?;
        }
        DriverCommand::Delete { id } => {
            let driver = fleet.get_driver(&id)?;
            fleet.delete_driver(driver.id.as_str())?;
            format_or_json(ctx.format, &json!({ "deleted": driver.id }), || {
                println!("Deleted driver {}", driver.id)
            })?;
        }
    }
    Ok(())
}

fn print_driver(driver: &Driver) {
    println!("{} {}", color::header("Driver:"), driver.id);
    println!("  Name:     {}", driver.name);
    println!("  Phone:    {}", or_dash(driver.phone.as_ref()));
    println!("  Email:    {}", or_dash(driver.email.as_ref()));
    println!("  Status:   {}", driver.status);
    println!("  Created:  {}", color::muted(&format_time(driver.created_at)));
}

fn write_drivers(drivers: &[Driver], out: &mut dyn Write) -> std::io::Result<()> {
    let rows: Vec<Vec<String>> = drivers
        .iter()
        .map(|d| {
            vec![
                d.id.to_string(),
                d.status.clone(),
                or_dash(d.phone.as_ref()),
                or_dash(d.email.as_ref()),
                d.name.clone(),
            ]
        })
        .collect();
    write_table(out, &["ID", "STATUS", "PHONE", "EMAIL", "NAME"], &rows)
}
