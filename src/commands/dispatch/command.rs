//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use travel_core::config::TravelConfig;
use travel_core::error::Result;
use travel_core::vault::Vault;

use crate::cli::{Cli, OutputFormat};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a Path,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a Path, start: Instant) -> Self {
        Self { cli, root, start }
    }

    pub fn format(&self) -> OutputFormat {
        self.cli.format
    }

    /// Load the vault's settings; the vault directory must exist
    pub fn load_config(&self) -> Result<TravelConfig> {
        Vault::open(self.root)?;
        TravelConfig::load_for_vault(self.root)
    }

    /// Open the vault with its settings applied
    pub fn open_vault(&self) -> Result<(Vault, TravelConfig)> {
        let vault = Vault::open(self.root)?;
        let config = TravelConfig::load_for_vault(self.root)?;
        let vault = vault.with_scope(config.scope());
        Ok((vault, config))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("travel {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Walk every note reachable from a starting note, one step at a time.");
        println!();
        println!("Run `travel --help` for usage information.");
        Ok(())
    }
}
