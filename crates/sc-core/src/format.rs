//! Human-readable rendering of times and durations.

use crate::clock::ClockTime;

/// Renders a time on the 12-hour clock, e.g. `"12:00 AM"` or `"1:05 PM"`.
pub fn format_clock_time(time: ClockTime) -> String {
    let (hour, meridiem) = match time.hour() {
        0 => (12, "AM"),
        h @ 1..=11 => (h, "AM"),
        12 => (12, "PM"),
        h => (h - 12, "PM"),
    };
    format!("{hour}:{:02} {meridiem}", time.minute())
}

/// Formats a whole-minute duration.
/// Returns "Xh" on the hour, "Xh Ym" otherwise, and "Ym" below one hour.
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let minutes = minutes % 60;

    match (hours, minutes) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}
