pub mod clear;
pub mod config;
pub mod default_day;
pub mod export;
pub mod init;
pub mod log;
pub mod permit;
pub mod set;
pub mod show;
pub mod suggest;

use crate::errors::{AppError, AppResult};
use crate::models::day_record::Weekday;
use crate::models::time_of_day::TimeOfDay;
use crate::utils::time::parse_time;

/// Parse a day argument shared by several commands.
pub(crate) fn parse_day(code: &str) -> AppResult<Weekday> {
    Weekday::from_code(code).ok_or_else(|| AppError::InvalidDay(code.to_string()))
}

/// Apply an optional CLI time argument to a stamp field.
/// Absent flag: leave the field unchanged. `-`: clear it. Anything else
/// must parse as HH:MM.
pub(crate) fn apply_time_arg(
    field: &mut Option<TimeOfDay>,
    arg: Option<&String>,
) -> AppResult<bool> {
    match arg {
        None => Ok(false),
        Some(s) if s == "-" => {
            *field = None;
            Ok(true)
        }
        Some(s) => {
            let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
            *field = Some(t);
            Ok(true)
        }
    }
}
