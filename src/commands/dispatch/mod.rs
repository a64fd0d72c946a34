//! Command dispatch logic for travel

use std::time::Instant;

use tracing::debug;
use travel_core::error::Result;

use crate::cli::paths::resolve_vault_path;
use crate::cli::Cli;

mod command;
mod commands;
mod macros;

pub(crate) use command::CommandContext;
use command::{Command, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = resolve_vault_path(cli.vault.clone());

    debug!(elapsed = ?start.elapsed(), root = %root.display(), "resolve_vault");

    let ctx = CommandContext::new(cli, &root, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
