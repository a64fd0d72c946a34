use tracing::{debug, info, warn};

use crate::error::{Result, TravelError};
use crate::graph::GraphSource;
use crate::note::NoteId;
use crate::travel::state::{Advance, Progress, TravelState};

/// Message shown when `next` is called with nothing left to travel
pub const TRAVEL_DONE: &str = "Travel is Done!";

/// Reports the note the user currently has open
pub trait ActiveNote {
    fn active_note(&self) -> Option<NoteId>;
}

/// Shows a delivered note to the user
pub trait NoteOpener {
    fn open(&mut self, note: &NoteId) -> Result<()>;
}

/// Fire-and-forget user notifications
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

impl ActiveNote for Option<NoteId> {
    fn active_note(&self) -> Option<NoteId> {
        self.clone()
    }
}

impl Notifier for Vec<String> {
    fn notify(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// A travel session wired to its collaborators.
///
/// Holds the only mutable [`TravelState`]; `reset` replaces it and `next`
/// advances it by one note.
pub struct TravelSession<A, G, O, N> {
    active: A,
    graph: G,
    opener: O,
    notifier: N,
    state: TravelState,
}

impl<A, G, O, N> TravelSession<A, G, O, N>
where
    A: ActiveNote,
    G: GraphSource,
    O: NoteOpener,
    N: Notifier,
{
    pub fn new(active: A, graph: G, opener: O, notifier: N) -> Self {
        Self {
            active,
            graph,
            opener,
            notifier,
            state: TravelState::idle(),
        }
    }

    /// Begin or restart travel from the active note.
    ///
    /// Failures are reported through the notifier and leave the previous
    /// state untouched.
    pub fn reset(&mut self) -> Result<Progress> {
        match self.try_reset() {
            Ok(progress) => Ok(progress),
            Err(e) => {
                warn!(error = %e, "reset_failed");
                self.notifier.notify(&e.to_string());
                Err(e)
            }
        }
    }

    fn try_reset(&mut self) -> Result<Progress> {
        let start = self.active.active_note().ok_or(TravelError::NoActiveNote)?;
        let graph = self.graph.snapshot()?;

        self.notifier.notify(&format!("Start travel with {}", start));
        self.state = TravelState::discover(start, &graph);

        let progress = self.state.progress();
        info!(
            start = ?progress.started_note,
            total = progress.total,
            "travel_started"
        );
        Ok(progress)
    }

    /// Deliver the next note and ask the opener to show it.
    ///
    /// Returns `None` and notifies "Travel is Done!" once the queue is
    /// empty; repeated calls keep doing so without touching the state. An
    /// opener failure is logged and does not block later calls.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<NoteId> {
        match self.state.advance() {
            Advance::Delivered { note, next } => {
                self.state = next;
                debug!(
                    note = %note,
                    traveled = self.state.traveled(),
                    total = self.state.total(),
                    "travel_next"
                );
                if let Err(e) = self.opener.open(&note) {
                    warn!(note = %note, error = %e, "open_failed");
                }
                Some(note)
            }
            Advance::Exhausted => {
                debug!("travel_exhausted");
                self.notifier.notify(TRAVEL_DONE);
                None
            }
        }
    }
}

impl<A, G, O, N> TravelSession<A, G, O, N> {
    pub fn progress(&self) -> Progress {
        self.state.progress()
    }

    pub fn state(&self) -> &TravelState {
        &self.state
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    pub fn opener_mut(&mut self) -> &mut O {
        &mut self.opener
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}
