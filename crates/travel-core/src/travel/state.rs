use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::graph::{discover, LinkGraph};
use crate::note::NoteId;

/// Session state of one travel.
///
/// Built wholesale by [`TravelState::discover`] and advanced by the pure
/// [`TravelState::advance`] transition. The queue is the tail of
/// `visited_order` after `cursor`, so it can never drift from the
/// discovery order. Advancing shares the discovered notes with the
/// previous state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TravelState {
    started_note: Option<NoteId>,
    visited_order: Arc<Vec<NoteId>>,
    cursor: usize,
}

/// Outcome of stepping a travel forward
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The next note and the state after delivering it
    Delivered { note: NoteId, next: TravelState },
    /// Nothing left to deliver; the state is unchanged
    Exhausted,
}

impl TravelState {
    /// State before any reset
    pub fn idle() -> Self {
        Self::default()
    }

    /// Discover every note reachable from `start` and queue all but `start`
    pub fn discover(start: NoteId, graph: &LinkGraph) -> Self {
        let visited_order = discover(&start, graph);
        TravelState {
            started_note: Some(start),
            visited_order: Arc::new(visited_order),
            cursor: 1,
        }
    }

    /// Pop the front of the queue
    pub fn advance(&self) -> Advance {
        match self.visited_order.get(self.cursor) {
            Some(note) => Advance::Delivered {
                note: note.clone(),
                next: TravelState {
                    started_note: self.started_note.clone(),
                    visited_order: Arc::clone(&self.visited_order),
                    cursor: self.cursor + 1,
                },
            },
            None => Advance::Exhausted,
        }
    }

    pub fn started_note(&self) -> Option<&NoteId> {
        self.started_note.as_ref()
    }

    /// Every discovered note, start first
    pub fn visited_order(&self) -> &[NoteId] {
        &self.visited_order
    }

    /// Notes not yet delivered, in delivery order
    pub fn queue(&self) -> &[NoteId] {
        self.visited_order.get(self.cursor..).unwrap_or(&[])
    }

    /// Notes to travel, excluding the start note
    pub fn total(&self) -> usize {
        self.visited_order.len().saturating_sub(1)
    }

    pub fn remaining(&self) -> usize {
        self.queue().len()
    }

    pub fn traveled(&self) -> usize {
        self.total() - self.remaining()
    }

    pub fn is_done(&self) -> bool {
        self.started_note.is_some() && self.remaining() == 0
    }

    pub fn progress(&self) -> Progress {
        Progress {
            started_note: self.started_note.clone(),
            total: self.total(),
            traveled: self.traveled(),
            remaining: self.remaining(),
        }
    }
}

/// Derived counters of a travel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub started_note: Option<NoteId>,
    pub total: usize,
    pub traveled: usize,
    pub remaining: usize,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.traveled, self.total)
    }
}
