//! Terminal collaborators for a travel session

use std::cell::RefCell;
use std::process::Command;
use std::rc::Rc;

use tracing::debug;
use travel_core::error::{Result, TravelError};
use travel_core::note::NoteId;
use travel_core::travel::{ActiveNote, NoteOpener, Notifier};
use travel_core::vault::Vault;

use crate::cli::OutputFormat;

/// The note the user is looking at, shared between the session and the opener
#[derive(Debug, Clone, Default)]
pub struct ActiveHandle(Rc<RefCell<Option<NoteId>>>);

impl ActiveHandle {
    pub fn new(initial: Option<NoteId>) -> Self {
        ActiveHandle(Rc::new(RefCell::new(initial)))
    }

    pub fn set(&self, note: NoteId) {
        *self.0.borrow_mut() = Some(note);
    }
}

impl ActiveNote for ActiveHandle {
    fn active_note(&self) -> Option<NoteId> {
        self.0.borrow().clone()
    }
}

/// How a delivered note is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    /// Print the note's path
    Print,
    /// Run an editor command with the note's path appended
    Editor(String),
}

/// Opens notes of a vault and makes them the active note
pub struct VaultOpener<'a> {
    vault: &'a Vault,
    active: ActiveHandle,
    mode: ViewMode,
    format: OutputFormat,
}

impl<'a> VaultOpener<'a> {
    pub fn new(vault: &'a Vault, active: ActiveHandle, mode: ViewMode, format: OutputFormat) -> Self {
        Self {
            vault,
            active,
            mode,
            format,
        }
    }

    fn launch(&self, editor: &str, note: &NoteId) -> Result<()> {
        let mut parts = editor.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| TravelError::unresolved_target(note, "empty editor command"))?;
        let path = self.vault.note_path(note);

        debug!(editor = %editor, path = %path.display(), "open_editor");

        let status = Command::new(program)
            .args(parts)
            .arg(&path)
            .status()
            .map_err(|e| {
                TravelError::unresolved_target(note, format!("failed to run '{}': {}", editor, e))
            })?;
        if !status.success() {
            return Err(TravelError::unresolved_target(
                note,
                format!("editor exited with {}", status),
            ));
        }
        Ok(())
    }
}

impl NoteOpener for VaultOpener<'_> {
    fn open(&mut self, note: &NoteId) -> Result<()> {
        if !self.vault.contains(note) {
            return Err(TravelError::unresolved_target(note, "note no longer exists"));
        }
        self.active.set(note.clone());

        match &self.mode {
            ViewMode::Editor(editor) => self.launch(editor, note),
            ViewMode::Print => {
                let path = self.vault.note_path(note);
                match self.format {
                    OutputFormat::Human => println!("{}", path.display()),
                    OutputFormat::Json => println!(
                        "{}",
                        serde_json::json!({
                            "event": "open",
                            "note": note,
                            "path": path.display().to_string(),
                        })
                    ),
                }
                Ok(())
            }
        }
    }
}

/// Prints session notices on stdout
#[derive(Debug, Clone, Copy)]
pub struct TerminalNotifier {
    format: OutputFormat,
    quiet: bool,
}

impl TerminalNotifier {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&mut self, message: &str) {
        match self.format {
            OutputFormat::Json => println!(
                "{}",
                serde_json::json!({ "event": "notice", "message": message })
            ),
            OutputFormat::Human if !self.quiet => println!("{}", message),
            OutputFormat::Human => {}
        }
    }
}

/// Editor for `--open`: flag, then settings, then `$VISUAL`, then `$EDITOR`
pub fn resolve_editor(flag: Option<&str>, configured: Option<&str>) -> Result<String> {
    flag.map(str::to_string)
        .or_else(|| configured.map(str::to_string))
        .or_else(|| std::env::var("VISUAL").ok())
        .or_else(|| std::env::var("EDITOR").ok())
        .filter(|editor| !editor.trim().is_empty())
        .ok_or_else(|| {
            TravelError::UsageError(
                "no editor configured. Set VISUAL or EDITOR, `travel config set editor`, or use --editor"
                    .to_string(),
            )
        })
}
