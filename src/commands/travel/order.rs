//! `travel order` - print the full travel order from a note

use tracing::debug;
use travel_core::error::Result;
use travel_core::graph::GraphSource;
use travel_core::travel::TravelState;

use crate::cli::OutputFormat;
use crate::commands::dispatch::{trace_command, CommandContext};

pub fn execute(ctx: &CommandContext, reference: &str) -> Result<()> {
    let (vault, _config) = ctx.open_vault()?;
    let start = vault.resolve_note(reference)?;
    trace_command!(ctx.cli, ctx.start, "open_vault");

    let graph = vault.snapshot()?;
    let state = TravelState::discover(start, &graph);
    trace_command!(ctx.cli, ctx.start, "discover");
    debug!(total = state.total(), "order");

    match ctx.format() {
        OutputFormat::Human => {
            for note in state.visited_order() {
                println!("{}", note);
            }
            if !ctx.cli.quiet {
                println!();
                println!("{}", summary(state.total()));
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "start": state.started_note(),
                "order": state.visited_order(),
                "total": state.total(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn summary(total: usize) -> String {
    match total {
        1 => "1 note to travel".to_string(),
        n => format!("{} notes to travel", n),
    }
}
