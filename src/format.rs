//! Human-readable display formatting for record timestamps

use chrono::{DateTime, Utc};

/// Relative age label for a record timestamp.
///
/// Under an hour old reads "Just now" (future timestamps, e.g. upcoming
/// due dates, land here too); under a day "3h ago"; under a week
/// "2d ago"; anything older gets an absolute date like "Feb 6, 2026".
pub fn age_label(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - timestamp).num_hours();

    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if hours < 168 {
        format!("{}d ago", hours / 24)
    } else {
        timestamp.format("%b %-d, %Y").to_string()
    }
}
