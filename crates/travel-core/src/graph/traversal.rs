use crate::error::Result;
use crate::graph::LinkGraph;

/// Trait for providing a point-in-time snapshot of resolved links.
///
/// The snapshot is read fresh for every travel reset; implementors must
/// only report edges whose target resolves to an existing note.
pub trait GraphSource {
    fn snapshot(&self) -> Result<LinkGraph>;
}

impl GraphSource for LinkGraph {
    fn snapshot(&self) -> Result<LinkGraph> {
        Ok(self.clone())
    }
}

impl<G: GraphSource + ?Sized> GraphSource for &G {
    fn snapshot(&self) -> Result<LinkGraph> {
        (**self).snapshot()
    }
}
