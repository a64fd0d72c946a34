//! Step-wise travel through the notes reachable from a start note
//!
//! `TravelState` is an immutable value; `TravelSession` owns the current
//! state together with the injected collaborators and implements the
//! `reset` / `next` command surface.

pub mod session;
pub mod state;


pub use session::{ActiveNote, NoteOpener, Notifier, TravelSession, TRAVEL_DONE};
pub use state::{Advance, Progress, TravelState};
