//! Human-readable time formatting for the card.

use chrono::{Local, TimeZone};

/// Render a duration as the largest non-zero unit pair.
///
/// Negative durations (clock skew, future timestamps) read as `"just now"`.
/// Units are floored, never rounded: 90 seconds is `"1min"`.
///
/// ```
/// use statuscard_core::format::format_elapsed;
///
/// assert_eq!(format_elapsed(0), "0s");
/// assert_eq!(format_elapsed(3 * 3_600_000 + 5 * 60_000), "3h 5min");
/// ```
pub fn format_elapsed(duration_ms: i64) -> String {
    if duration_ms < 0 {
        return "just now".to_string();
    }

    let secs = duration_ms / 1000;
    let mins = secs / 60;
    let hours = mins / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d {}h", days, hours % 24)
    } else if hours > 0 {
        format!("{}h {}min", hours, mins % 60)
    } else if mins > 0 {
        format!("{}min", mins)
    } else {
        format!("{}s", secs)
    }
}

/// Calendar date and time in the local timezone, e.g. `"Oct 19, 2026, 14:05"`.
///
/// Timestamps outside chrono's representable range fall back to the raw
/// millisecond value so the result is never empty.
pub fn format_absolute(timestamp_ms: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_ms).single() {
        Some(dt) => dt.format("%b %-d, %Y, %H:%M").to_string(),
        None => format!("@{}ms", timestamp_ms),
    }
}

/// Local wall-clock time, used for the "Last updated" line.
pub fn format_clock(timestamp_ms: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_ms).single() {
        Some(dt) => dt.format("%H:%M:%S").to_string(),
        None => format!("@{}ms", timestamp_ms),
    }
}
