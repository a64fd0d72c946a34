use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use crate::graph::LinkGraph;
use crate::note::NoteId;
use crate::trace_time;

/// State tracked during discovery
struct BfsState {
    visited: HashSet<NoteId>,
    order: Vec<NoteId>,
    frontier: VecDeque<NoteId>,
}

impl BfsState {
    fn new(start: &NoteId) -> Self {
        let mut state = Self {
            visited: HashSet::new(),
            order: Vec::new(),
            frontier: VecDeque::new(),
        };
        state.visit(start);
        state
    }

    /// Record a note the first time it is seen. Returns false on repeats.
    fn visit(&mut self, id: &NoteId) -> bool {
        if !self.visited.insert(id.clone()) {
            return false;
        }
        self.order.push(id.clone());
        self.frontier.push_back(id.clone());
        true
    }
}

/// Breadth-first discovery of every note reachable from `start`.
///
/// Returns notes in first-discovery order with `start` at index 0. Ties are
/// broken by the neighbor order of the snapshot, so a deterministic graph
/// gives a deterministic order. Each note appears once even on cyclic graphs.
#[tracing::instrument(skip_all, fields(start = %start, notes = graph.len()))]
pub fn discover(start: &NoteId, graph: &LinkGraph) -> Vec<NoteId> {
    let started = Instant::now();
    let mut state = BfsState::new(start);

    while let Some(current) = state.frontier.pop_front() {
        for neighbor in graph.outgoing(current.as_str()) {
            state.visit(neighbor);
        }
    }

    trace_time!(started, "discover", visited = state.order.len());
    state.order
}
