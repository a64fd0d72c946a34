//! Link graph snapshots and breadth-first discovery
//!
//! - `LinkGraph`: point-in-time map of resolved outgoing links
//! - `GraphSource`: pluggable provider of snapshots (vault, synthetic graphs)
//! - `discover`: first-discovery order of every note reachable from a start

pub mod bfs;
pub mod traversal;
pub mod types;

pub use bfs::discover;
pub use traversal::GraphSource;
pub use types::LinkGraph;
