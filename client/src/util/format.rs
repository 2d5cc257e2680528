//! Display formatting for backend values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate};

use crate::net::types::{ComplaintStatus, Priority};

/// `dd/mm/yyyy` for an RFC 3339 timestamp or a bare date.
///
/// Unparseable input is shown as-is; an empty value becomes a dash.
pub fn display_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "-".to_owned();
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.format("%d/%m/%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    raw.to_owned()
}

pub fn status_class(status: ComplaintStatus) -> &'static str {
    match status {
        ComplaintStatus::Pending => "chip chip--pending",
        ComplaintStatus::InProgress => "chip chip--progress",
        ComplaintStatus::Resolved => "chip chip--resolved",
        ComplaintStatus::Rejected => "chip chip--rejected",
    }
}

pub fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "chip chip--low",
        Priority::Medium => "chip chip--medium",
        Priority::High => "chip chip--high",
    }
}

/// Human file size, e.g. `2.4 MB`.
#[allow(clippy::cast_precision_loss)]
pub fn file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < KB * KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / (KB * KB))
    }
}
