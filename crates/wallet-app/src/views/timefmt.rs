//! Relative timestamp formatting for cards and history lines.

use chrono::{DateTime, Utc};

/// Compact "time ago" label: `Just now`, `5m`, `3h`, `2d`, then a date.
#[must_use]
pub fn relative(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(then);
    let minutes = delta.num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes}m");
    }
    let hours = delta.num_hours();
    if hours < 24 {
        return format!("{hours}h");
    }
    let days = delta.num_days();
    if days < 7 {
        return format!("{days}d");
    }
    then.format("%b %-d, %Y").to_string()
}
