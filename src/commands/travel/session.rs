//! `travel session` - step through reachable notes from stdin commands
//!
//! One command per line:
//! - `reset [<NOTE>]`: start over from the active note (or make `<NOTE>` active first)
//! - `next` or an empty line: deliver the next note
//! - `progress`: print progress
//! - `open <NOTE>`: make `<NOTE>` the active note
//! - `help`, `quit`/`exit` (end of input also quits)

use std::io::{self, BufRead};

use tracing::{debug, warn};
use travel_core::error::{Result, TravelError};
use travel_core::travel::{NoteOpener, TravelSession};
use travel_core::vault::Vault;

use super::adapters::{resolve_editor, ActiveHandle, TerminalNotifier, VaultOpener, ViewMode};
use super::display::print_progress;
use crate::cli::OutputFormat;
use crate::commands::dispatch::{trace_command, CommandContext};

const HELP: &str = "\
Commands:
  reset [NOTE]  start travel from the active note (or from NOTE)
  next          open the next note (an empty line does the same)
  progress      show travel progress
  open NOTE     make NOTE the active note
  help          show this help
  quit          end the session";

pub struct SessionOptions<'a> {
    pub note: Option<&'a str>,
    pub open: bool,
    pub editor: Option<&'a str>,
}

/// A parsed session input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Reset(Option<String>),
    Next,
    Progress,
    Open(String),
    Help,
    Quit,
}

impl SessionCommand {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let argument = (!rest.is_empty()).then(|| rest.to_string());

        match (word.to_lowercase().as_str(), argument) {
            ("reset", note) => Ok(SessionCommand::Reset(note)),
            ("" | "next", None) => Ok(SessionCommand::Next),
            ("progress", None) => Ok(SessionCommand::Progress),
            ("open", Some(note)) => Ok(SessionCommand::Open(note)),
            ("open", None) => Err(TravelError::UsageError("open needs a note".to_string())),
            ("help" | "?", None) => Ok(SessionCommand::Help),
            ("quit" | "exit", None) => Ok(SessionCommand::Quit),
            _ => Err(TravelError::UsageError(format!(
                "unknown command: {} (type `help`)",
                line
            ))),
        }
    }
}

type Session<'a> = TravelSession<ActiveHandle, &'a Vault, VaultOpener<'a>, TerminalNotifier>;

pub fn execute(ctx: &CommandContext, options: SessionOptions) -> Result<()> {
    let (vault, config) = ctx.open_vault()?;
    let initial = options
        .note
        .map(|reference| vault.resolve_note(reference))
        .transpose()?;
    let mode = if options.open {
        ViewMode::Editor(resolve_editor(options.editor, config.editor.as_deref())?)
    } else {
        ViewMode::Print
    };
    trace_command!(ctx.cli, ctx.start, "open_vault");

    let format = ctx.format();
    let active = ActiveHandle::new(initial);
    let opener = VaultOpener::new(&vault, active.clone(), mode, format);
    let notifier = TerminalNotifier::new(format, ctx.cli.quiet);
    let mut session = TravelSession::new(active.clone(), &vault, opener, notifier);

    if format == OutputFormat::Human && !ctx.cli.quiet {
        eprintln!("Type `help` for commands.");
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        match SessionCommand::parse(&line) {
            Ok(SessionCommand::Quit) => break,
            Ok(command) => {
                debug!(command = ?command, "session_command");
                if let Err(e) = run_command(&mut session, &vault, &active, command, format) {
                    report(&e, ctx);
                }
            }
            Err(e) => report(&e, ctx),
        }
    }

    debug!(progress = %session.progress(), "session_end");
    Ok(())
}

fn run_command(
    session: &mut Session<'_>,
    vault: &Vault,
    active: &ActiveHandle,
    command: SessionCommand,
    format: OutputFormat,
) -> Result<()> {
    match command {
        SessionCommand::Reset(note) => {
            if let Some(reference) = note {
                active.set(vault.resolve_note(&reference)?);
            }
            // Failures were already shown through the notifier.
            if session.reset().is_ok() {
                print_progress(&session.progress(), format);
            }
        }
        SessionCommand::Next => {
            session.next();
            print_progress(&session.progress(), format);
        }
        SessionCommand::Progress => print_progress(&session.progress(), format),
        SessionCommand::Open(reference) => {
            let note = vault.resolve_note(&reference)?;
            session.opener_mut().open(&note)?;
        }
        SessionCommand::Help => println!("{}", HELP),
        SessionCommand::Quit => {}
    }
    Ok(())
}

fn report(error: &TravelError, ctx: &CommandContext) {
    warn!(error = %error, "session_command_failed");
    match ctx.format() {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        OutputFormat::Human if !ctx.cli.quiet => eprintln!("error: {}", error),
        OutputFormat::Human => {}
    }
}
