//! Command dispatch logic for rapport

use std::time::Instant;

use crate::cli::Cli;
use rapport_core::error::Result;
use tracing::debug;

mod command;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    debug!(elapsed = ?start.elapsed(), command = ?cli.command, "dispatch");

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
