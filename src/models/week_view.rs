//! Derived display values. One recomputation pass over a `WeekState`
//! produces a `WeekView`; the presentation layer only reads it.

use crate::models::time_of_day::TimeOfDay;
use serde::Serialize;

/// Lunch-window advisory. Display-only: never feeds back into the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LunchWarning {
    FirstExitBeforeWindow,
    SecondEntryAfterWindow,
}

impl LunchWarning {
    pub fn message(&self) -> &'static str {
        match self {
            LunchWarning::FirstExitBeforeWindow => "Uscita 1 prima delle 12:00",
            LunchWarning::SecondEntryAfterWindow => "Entrata 2 dopo le 14:30",
        }
    }
}

/// Per-field ordering violations (each stamp must not precede the one
/// before it). Display-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrderingFlags {
    pub exit1_before_entry1: bool,
    pub entry2_before_exit1: bool,
    pub exit2_before_entry2: bool,
}

impl OrderingFlags {
    pub fn any(&self) -> bool {
        self.exit1_before_entry1 || self.entry2_before_exit1 || self.exit2_before_entry2
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DayView {
    /// Threshold-rounded signed balance, minutes.
    pub balance: i64,
    /// Minutes lost to per-stamp rounding.
    pub rubato: i64,
    pub suggested_exit2: Option<TimeOfDay>,
    pub lunch_warning: Option<LunchWarning>,
    /// Worth adding a permit: stamps sit outside the expected spans and no
    /// permit has been entered yet.
    pub permit_reminder: bool,
    /// Second entry stamped, second exit still open.
    pub pending_afternoon: bool,
    pub ordering: OrderingFlags,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct WeekView {
    pub days: [DayView; 5],
    pub total_balance: i64,
    pub total_rubato: i64,
}
