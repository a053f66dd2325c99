// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fj store` - State directory maintenance

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::json;

use super::Context;
use crate::exit_error::ExitError;
use crate::output::format_or_json;

#[derive(Args)]
pub struct StoreArgs {
    #[command(subcommand)]
    pub command: StoreCommand,
}

#[derive(Subcommand)]
pub enum StoreCommand {
    /// Snapshot current state and compact the event log
    Checkpoint,
}

pub fn handle(command: StoreCommand, ctx: &Context) -> Result<()> {
    match command {
        StoreCommand::Checkpoint => {
            let seq = ctx.scheduler.store().checkpoint().map_err(ExitError::from)?;
            format_or_json(ctx.format, &json!({ "seq": seq }), || {
                println!("Checkpoint written at seq {seq}")
            })?;
        }
    }
    Ok(())
}
