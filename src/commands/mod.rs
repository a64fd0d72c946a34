//! CLI commands for travel

pub mod config;
pub mod dispatch;
pub mod travel;
