//! Duration and hour formatting for tables and status output.
//!
//! All durations render as zero-padded "HH:MM" (or "HH:MM:SS" for the live
//! session counter); fractional hour totals render as "7h 30m". Negative
//! inputs are treated as zero so a skewed clock can never print a negative
//! time.

use chrono::Duration;

/// Formats a duration as "HH:MM".
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats a duration as "HH:MM:SS", used for the ticking session counter.
pub fn format_duration_hms(duration: &Duration) -> String {
    let total_seconds = duration.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let mins = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, mins, secs)
}

/// Formats fractional hours as "7h 30m".
pub fn format_hours(hours: f64) -> String {
    if !hours.is_finite() || hours <= 0.0 {
        return "0h 0m".to_string();
    }
    let whole = hours.floor() as i64;
    let mins = ((hours - whole as f64) * 60.0).round() as i64;
    // 7.999 rounds up to a full hour, not "7h 60m"
    if mins == 60 {
        format!("{}h 0m", whole + 1)
    } else {
        format!("{}h {}m", whole, mins)
    }
}
