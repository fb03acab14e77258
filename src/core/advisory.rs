//! Soft-validation predicates over a `DayRecord`. All of them are pure
//! display hints: nothing here ever changes a balance.

use crate::core::policy::WorkPolicy;
use crate::models::day_record::DayRecord;
use crate::models::week_view::{LunchWarning, OrderingFlags};

/// Lunch-window advisory: the break should sit inside 12:00-14:30.
pub fn lunch_warning(rec: &DayRecord, policy: &WorkPolicy) -> Option<LunchWarning> {
    let (exit1, entry2) = match (rec.exit1, rec.entry2) {
        (Some(u1), Some(e2)) => (u1, e2),
        _ => return None,
    };

    if exit1 < policy.lunch_window_start {
        Some(LunchWarning::FirstExitBeforeWindow)
    } else if entry2 > policy.lunch_window_end {
        Some(LunchWarning::SecondEntryAfterWindow)
    } else {
        None
    }
}

/// Stamps sit outside the expected spans and no permit was entered: the
/// day probably needs one. Quiet as soon as any permit is present.
pub fn permit_reminder(rec: &DayRecord, policy: &WorkPolicy) -> bool {
    if rec.permit_minutes > 0 {
        return false;
    }

    if let Some(e1) = rec.entry1
        && e1 > policy.late_entry
    {
        return true;
    }

    if let Some(u1) = rec.exit1
        && u1 < policy.lunch_window_start
        && (rec.entry2.is_none() || rec.exit2.is_none())
    {
        return true;
    }

    if let Some(e2) = rec.entry2
        && e2 > policy.lunch_window_end
    {
        return true;
    }

    if let Some(u2) = rec.exit2
        && u2 < policy.min_suggested_exit
    {
        return true;
    }

    false
}

/// Second entry stamped, second exit still open: the day's balance is
/// deferred, not on target.
pub fn pending_afternoon(rec: &DayRecord) -> bool {
    rec.entry2.is_some() && rec.exit2.is_none()
}

/// Each stamp must not precede the one before it. Violations flag the
/// later field of the offending pair.
pub fn ordering_flags(rec: &DayRecord) -> OrderingFlags {
    let before = |a, b| match (a, b) {
        (Some(x), Some(y)) => y < x,
        _ => false,
    };

    OrderingFlags {
        exit1_before_entry1: before(rec.entry1, rec.exit1),
        entry2_before_exit1: before(rec.exit1, rec.entry2),
        exit2_before_entry2: before(rec.entry2, rec.exit2),
    }
}
