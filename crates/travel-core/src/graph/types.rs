use std::collections::HashMap;

use serde::Serialize;

use crate::note::NoteId;

/// Directed graph of resolved outgoing links.
///
/// Each note maps to its link targets in the order the source reported
/// them. A note absent from the map has no outgoing links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LinkGraph {
    outgoing: HashMap<NoteId, Vec<NoteId>>,
}

impl LinkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(note, targets)` pairs.
    ///
    /// ```
    /// use travel_core::graph::LinkGraph;
    ///
    /// let graph = LinkGraph::from_adjacency([("A", vec!["B", "C"]), ("B", vec![])]);
    /// assert_eq!(graph.outgoing("A").len(), 2);
    /// assert!(graph.outgoing("Z").is_empty());
    /// ```
    pub fn from_adjacency<I, S, T>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<T>)>,
        S: Into<NoteId>,
        T: Into<NoteId>,
    {
        adjacency
            .into_iter()
            .map(|(from, targets)| (from.into(), targets.into_iter().map(Into::into).collect()))
            .collect()
    }

    /// Set the outgoing links of a note, replacing any previous entry
    pub fn set_links(&mut self, from: NoteId, targets: Vec<NoteId>) {
        self.outgoing.insert(from, targets);
    }

    /// Outgoing links of a note, empty when the note is unknown
    pub fn outgoing(&self, id: &str) -> &[NoteId] {
        self.outgoing.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.outgoing.contains_key(id)
    }

    /// Number of notes with an entry in the snapshot
    pub fn len(&self) -> usize {
        self.outgoing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outgoing.is_empty()
    }

    /// Total number of directed edges
    pub fn edge_count(&self) -> usize {
        self.outgoing.values().map(Vec::len).sum()
    }

    /// Drop every edge whose target fails `keep`.
    ///
    /// Source entries are left in place so a note outside the predicate can
    /// still contribute its links when travel starts from it.
    pub fn retain_targets<F>(&mut self, mut keep: F)
    where
        F: FnMut(&NoteId) -> bool,
    {
        for targets in self.outgoing.values_mut() {
            targets.retain(|target| keep(target));
        }
    }
}

impl FromIterator<(NoteId, Vec<NoteId>)> for LinkGraph {
    fn from_iter<I: IntoIterator<Item = (NoteId, Vec<NoteId>)>>(iter: I) -> Self {
        LinkGraph {
            outgoing: iter.into_iter().collect(),
        }
    }
}
