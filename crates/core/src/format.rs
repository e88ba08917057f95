//! Shared number-to-text formatting for stats, profile and session screens.

/// Rounded percentage, e.g. `0.84` -> `"84%"`.
#[must_use]
pub fn percent_text(ratio: f64) -> String {
    format!("{}%", percent(ratio))
}

#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn percent(ratio: f64) -> i64 {
    (ratio * 100.0).round() as i64
}

/// `"3h 30m"`, `"2h"` or `"45m"`.
#[must_use]
pub fn minutes_text(total_minutes: u32) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if hours == 0 {
        return format!("{minutes}m");
    }
    if minutes == 0 {
        return format!("{hours}h");
    }
    format!("{hours}h {minutes}m")
}

/// `"54s"` or `"1m 5s"`.
#[must_use]
pub fn seconds_text(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    if minutes == 0 {
        return format!("{seconds}s");
    }
    format!("{minutes}m {seconds}s")
}

/// Countdown clock, `"12:00"` or `"0:07"`.
#[must_use]
pub fn countdown_text(total_seconds: u32) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// `part / goal` clamped to `0.0..=1.0`; zero goal gives zero.
#[must_use]
pub fn progress_ratio(part: u32, goal: u32) -> f64 {
    if goal == 0 {
        return 0.0;
    }
    (f64::from(part) / f64::from(goal)).min(1.0)
}
