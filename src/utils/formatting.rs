//! Formatting utilities used for CLI and export outputs.

use crate::models::time_of_day::TimeOfDay;

/// Render minutes as `HH:MM` (short) or `HHh MMm`, optionally with an
/// explicit sign. Zero never gets a sign.
pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 {
        "-"
    } else {
        ""
    };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// An optional stamp for table cells: `--:--` when absent.
pub fn stamp_or_placeholder(t: Option<TimeOfDay>) -> String {
    match t {
        Some(t) => t.to_string(),
        None => "--:--".to_string(),
    }
}
