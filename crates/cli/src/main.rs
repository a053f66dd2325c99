// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fj - fleet job scheduler CLI

mod color;
mod commands;
mod config;
mod env;
mod exit_error;
mod output;
mod time;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use fj_core::SystemClock;
use fj_engine::Scheduler;
use fj_storage::Store;

use commands::driver::{self, DriverArgs};
use commands::job::{self, JobArgs};
use commands::store::{self, StoreArgs};
use commands::truck::{self, TruckArgs};
use commands::Context;
use config::Config;
use exit_error::{ExitError, EXIT_FAILURE};
use output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "fj",
    version,
    about = "Fleet job scheduler: book drivers and trucks without double-booking",
    styles = color::styles()
)]
struct Cli {
    /// State directory [default: $FJ_STATE_DIR, $XDG_STATE_HOME/fj, ~/.local/state/fj]
    #[arg(long, global = true, value_name = "DIR")]
    state_dir: Option<PathBuf>,

    #[arg(short = 'o', long = "output", value_enum, global = true, default_value_t)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transport jobs and their bookings
    Job(JobArgs),
    /// Driver registry
    Driver(DriverArgs),
    /// Truck registry
    Truck(TruckArgs),
    /// State directory maintenance
    Store(StoreArgs),
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        let exit = ExitError::classify(&err);
        eprintln!("error: {}", exit.message);
        std::process::exit(exit.code);
    }
}

fn run(cli: Cli) -> Result<()> {
    let state_dir = cli.state_dir.or_else(env::state_dir).ok_or_else(|| {
        ExitError::new(
            EXIT_FAILURE,
            "cannot determine state directory; set FJ_STATE_DIR or pass --state-dir",
        )
    })?;
    let config = Config::load(&state_dir).map_err(ExitError::from)?;
    init_logging(&config);
    debug!(state_dir = %state_dir.display(), ?config, "starting");

    let store = Store::open(&state_dir, config.store()).map_err(ExitError::from)?;
    let ctx = Context {
        scheduler: Scheduler::with_options(store, SystemClock, config.scheduler()),
        format: cli.output,
    };

    match cli.command {
        Commands::Job(args) => job::handle(args.command, &ctx),
        Commands::Driver(args) => driver::handle(args.command, &ctx),
        Commands::Truck(args) => truck::handle(args.command, &ctx),
        Commands::Store(args) => store::handle(args.command, &ctx),
    }
}

/// `FJ_LOG` wins over the config's `log_level`; logs go to stderr.
fn init_logging(config: &Config) {
    let directive = env::log_filter()
        .or_else(|| config.log_level.clone())
        .unwrap_or_else(|| "warn".to_string());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
