//! Time utilities: parsing HH:MM, duration computations, formatting minutes, etc.

use crate::models::time_of_day::TimeOfDay;

pub fn parse_time(t: &str) -> Option<TimeOfDay> {
    TimeOfDay::parse(t)
}

/// Signed difference in minutes. No clamping and no ordering check: a
/// negative result means `end` precedes `start`, and callers that care
/// must check ordering themselves.
pub fn minutes_between(start: TimeOfDay, end: TimeOfDay) -> i64 {
    end.minutes() - start.minutes()
}

/// `HH:MM` with a sign prefix only when negative.
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
