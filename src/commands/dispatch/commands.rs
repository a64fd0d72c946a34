//! Command implementations for all travel commands

use travel_core::error::Result;

use crate::cli::{Commands, OrderArgs, SessionArgs};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::travel::session::SessionOptions;
use crate::commands::{config, travel};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Order(args) => execute_order(ctx, args),
            Commands::Session(args) => execute_session(ctx, args),
            Commands::Config { command } => config::execute(ctx, command),
        }
    }
}

fn execute_order(ctx: &CommandContext, args: &OrderArgs) -> Result<()> {
    travel::order::execute(ctx, &args.note)
}

fn execute_session(ctx: &CommandContext, args: &SessionArgs) -> Result<()> {
    travel::session::execute(
        ctx,
        SessionOptions {
            note: args.note.as_deref(),
            open: args.open,
            editor: args.editor.as_deref(),
        },
    )
}
