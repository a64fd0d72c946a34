//! `travel order` and `travel session` commands
//!
//! The engine lives in `travel_core::travel`; this module only wires it to
//! the terminal: which note is active, how a delivered note is shown, and
//! how notices and progress are printed.

pub mod adapters;
pub mod display;
pub mod order;
pub mod session;
