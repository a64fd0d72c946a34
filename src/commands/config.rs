//! `travel config` - show and edit the vault's travel settings

use tracing::info;
use travel_core::config::{config_path, TravelConfig};
use travel_core::error::Result;

use crate::cli::{ConfigCommands, OutputFormat};
use crate::commands::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, command: &ConfigCommands) -> Result<()> {
    let mut config = ctx.load_config()?;

    match command {
        ConfigCommands::Show => {}
        ConfigCommands::Set { key, value } => {
            config.set(key, value)?;
            config.save_for_vault(ctx.root)?;
            info!(key = %key, value = %value, "setting_saved");
        }
        ConfigCommands::Unset { key } => {
            config.unset(key)?;
            config.save_for_vault(ctx.root)?;
            info!(key = %key, "setting_reset");
        }
    }

    if matches!(command, ConfigCommands::Show) || !ctx.cli.quiet {
        print_config(ctx, &config)?;
    }
    Ok(())
}

fn print_config(ctx: &CommandContext, config: &TravelConfig) -> Result<()> {
    match ctx.format() {
        OutputFormat::Human => {
            println!("folders-including = {}", config.folders_including);
            println!(
                "editor = {}",
                config.editor.as_deref().unwrap_or("(not set)")
            );
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": config_path(ctx.root).display().to_string(),
                "version": config.version,
                "folders_including": config.folders_including,
                "editor": config.editor,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
