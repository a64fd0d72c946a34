//! Progress rendering

use serde_json::Value;
use travel_core::travel::Progress;

use crate::cli::OutputFormat;

/// Shown instead of a start note before the first reset
pub const IDLE_PLACEHOLDER: &str = "reset travel to begin";

/// One-line progress: start note (or placeholder) and `traveled/total`
pub fn progress_line(progress: &Progress) -> String {
    match &progress.started_note {
        Some(start) => format!("{}  {}", start, progress),
        None => format!("{}  {}", IDLE_PLACEHOLDER, progress),
    }
}

pub fn progress_json(progress: &Progress) -> Value {
    serde_json::json!({
        "event": "progress",
        "started_note": progress.started_note,
        "traveled": progress.traveled,
        "remaining": progress.remaining,
        "total": progress.total,
    })
}

pub fn print_progress(progress: &Progress, format: OutputFormat) {
    match format {
        OutputFormat::Human => println!("{}", progress_line(progress)),
        OutputFormat::Json => println!("{}", progress_json(progress)),
    }
}
