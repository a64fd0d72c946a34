//! Travel Review Core Library
//!
//! Walks every note reachable from a starting note, one step at a time,
//! never visiting a note twice.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod note;
pub mod travel;
pub mod vault;
