// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fj truck` - Truck registry commands

use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::json;

use fj_core::Truck;
use fj_engine::TruckRequest;

use super::{or_dash, Context};
use crate::color;
use crate::output::{format_or_json, handle_list, write_table};
use crate::time::format_time;

#[derive(Args)]
pub struct TruckArgs {
    #[command(subcommand)]
    pub command: TruckCommand,
}

#[derive(Subcommand)]
pub enum TruckCommand {
    /// Register a truck
    Add {
        /// Plate number, unique across the fleet
        plate: String,
        #[arg(long)]
        model: Option<String>,
        /// Load capacity in tons
        #[arg(long)]
        capacity: Option<f64>,
        /// Free-form status (default: AVAILABLE)
        #[arg(long)]
        status: Option<String>,
    },
    /// Change a truck. Flags not given keep their current value.
    Update {
        /// Truck ID (supports prefix matching)
        id: String,
        #[arg(long)]
        plate: Option<String>,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        capacity: Option<f64>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Show details of a truck
    Show {
        /// Truck ID (supports prefix matching)
        id: String,
    },
    /// List trucks, oldest first
    List {},
    /// Remove a truck no job is booked with
    Delete {
        /// Truck ID (supports prefix matching)
        id: String,
    },
}

pub fn handle(command: TruckCommand, ctx: &Context) -> Result<()> {
    let fleet = ctx.fleet();
    match command {
        TruckCommand::Add { plate, model, capacity, status } => {
            let req = TruckRequest::new(plate).model(model).capacity_tons(capacity).status(status);
            let truck = fleet.add_truck(req)?;
            format_or_json(ctx.format, &truck, || {
                println!("Added truck {} ({})", truck.id, truck.plate_number)
            })?;
        }
        TruckCommand::Update { id, plate, model, capacity, status } => {
            let current = fleet.get_truck(&id)?;
            let req = TruckRequest::new(plate.unwrap_or_else(|| current.plate_number.clone()))
                .model(model.or_else(|| current.model.clone()))
                .capacity_tons(capacity.or(current.capacity_tons))
                .status(status);
            let truck = fleet.update_truck(current.id.as_str(), req)?;
            format_or_json(ctx.format, &truck, || println!("Updated truck {}", truck.id))?;
        }
        TruckCommand::Show { id } => {
            let truck = fleet.get_truck(&id)?;
            format_or_json(ctx.format, &truck, || print_truck(&truck))?;
        }
        TruckCommand::List {} => {
            let trucks = fleet.list_trucks();
            handle_list(ctx.format, &trucks, "No trucks", write_trucks)?;
        }
        TruckCommand::Delete { id } => {
            let truck = fleet.get_truck(&id)?;
            fleet.delete_truck(truck.id.as_str())?;
            format_or_json(ctx.format, &json!({ "deleted": truck.id }), || {
                println!("Deleted truck {}", truck.id)
            })?;
        }
    }
    Ok(())
}

fn print_truck(truck: &Truck) {
    println!("{} {}", color::header("Truck:"), truck.id);
    println!("  Plate:    {}", truck.plate_number);
    println!("  Model:    {}", or_dash(truck.model.as_ref()));
    println!("  Capacity: {}", or_dash(truck.capacity_tons.map(|t| format!("{t} t"))));
    println!("  Status:   {}", truck.status);
    println!("  Created:  {}", color::muted(&format_time(truck.created_at)));
}

fn write_trucks(trucks: &[Truck], out: &mut dyn Write) -> std::io::Result<()> {
    let rows: Vec<Vec<String>> = trucks
        .iter()
        .map(|t| {
            vec![
                t.id.to_string(),
                t.plate_number.clone(),
                t.status.clone(),
                or_dash(t.capacity_tons),
                or_dash(t.model.as_ref()),
            ]
        })
        .collect();
    write_table(out, &["ID", "PLATE", "STATUS", "TONS", "MODEL"], &rows)
}
