//! Fixed accounting policy. These are contract parameters, not user data:
//! only the countable-window bounds vary between sites and are read from
//! the configuration.

use crate::config::Config;
use crate::models::time_of_day::TimeOfDay;
use crate::utils::time::parse_time;

pub const STANDARD_DAY_MINUTES: i64 = 8 * 60;
pub const THRESHOLD_MINUTES: i64 = 5;
pub const PERMIT_STEP_MINUTES: u16 = 30;
pub const MIN_LUNCH_BREAK_MINUTES: i64 = 60;

#[derive(Debug, Clone)]
pub struct WorkPolicy {
    pub standard_day: i64,
    pub threshold: i64,
    pub permit_step: u16,
    pub min_lunch_break: i64,
    /// Countable window: entries before the lower bound count from it.
    pub window_start: TimeOfDay,
    /// Countable window: exits after the upper bound count up to it.
    pub window_end: TimeOfDay,
    /// Suggestions never fall before this time.
    pub min_suggested_exit: TimeOfDay,
    /// Advisory lunch span. Never alters the balance.
    pub lunch_window_start: TimeOfDay,
    pub lunch_window_end: TimeOfDay,
    /// First entries after this time trigger the permit reminder.
    pub late_entry: TimeOfDay,
}

fn tod(s: &str) -> TimeOfDay {
    // Only called on literals below.
    parse_time(s).unwrap()
}

impl Default for WorkPolicy {
    fn default() -> Self {
        Self {
            standard_day: STANDARD_DAY_MINUTES,
            threshold: THRESHOLD_MINUTES,
            permit_step: PERMIT_STEP_MINUTES,
            min_lunch_break: MIN_LUNCH_BREAK_MINUTES,
            window_start: tod("07:30"),
            window_end: tod("20:00"),
            min_suggested_exit: tod("16:30"),
            lunch_window_start: tod("12:00"),
            lunch_window_end: tod("14:30"),
            late_entry: tod("09:00"),
        }
    }
}

impl WorkPolicy {
    /// Policy with the window bounds taken from the configuration.
    /// Malformed config values fall back to the defaults.
    pub fn from_config(cfg: &Config) -> Self {
        let mut policy = Self::default();
        if let Some(t) = parse_time(&cfg.day_window_start) {
            policy.window_start = t;
        }
        if let Some(t) = parse_time(&cfg.day_window_end) {
            policy.window_end = t;
        }
        policy
    }
}
