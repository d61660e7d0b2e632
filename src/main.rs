mod cli;
mod config;
mod convert;
mod days_cmd;
mod logging;
mod now_cmd;
mod schedule_cmd;
mod share;
mod share_cmd;
mod state;

use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::config::VanaConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = VanaConfig::load(cli.config.as_deref())?;
    let state = convert::build_calculator_state(&config.calculator)?;
    debug!(date = %state.date, pattern = %state.pattern, "calculator state");

    match cli.command {
        Command::Now(args) => now_cmd::run(args, &config),
        Command::Days(args) => days_cmd::run(args, state),
        Command::Schedule(args) => schedule_cmd::run(args, &config, state),
        Command::Share(args) => share_cmd::run(args, state),
    }
}
