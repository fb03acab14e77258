//! Day balance: capped slot sums, lunch rule, permit credit, threshold
//! rounding. The raw (unrounded) figure is kept separate from the rounded
//! one: the suggestion solver must mix rounded prior days with unrounded
//! current-day numbers, and rounding here is a lossy display-time step.

use crate::core::policy::WorkPolicy;
use crate::models::day_record::DayRecord;
use crate::models::time_of_day::TimeOfDay;
use crate::utils::time::minutes_between;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampRole {
    Entry,
    Exit,
}

/// Clamp a raw stamp to the countable window, but only in the direction
/// that would otherwise inflate the credited time. An early entry counts
/// from the window start; a late exit counts up to the window end. The
/// opposite edges are left at the actual reading.
pub fn cap(t: TimeOfDay, policy: &WorkPolicy, role: StampRole) -> TimeOfDay {
    match role {
        StampRole::Entry => {
            if t < policy.window_start {
                policy.window_start
            } else {
                t
            }
        }
        StampRole::Exit => {
            if t > policy.window_end {
                policy.window_end
            } else {
                t
            }
        }
    }
}

/// Round |x| to the nearest multiple of `step` (half away from zero) and
/// reapply the sign. Idempotent, odd-symmetric.
pub fn apply_threshold(minutes: i64, step: i64) -> i64 {
    if minutes == 0 {
        return 0;
    }
    let sign = if minutes > 0 { 1 } else { -1 };
    let abs = minutes.abs();
    let rounded = (abs + step / 2) / step * step;
    sign * rounded
}

/// Unrounded signed distance from the standard day.
///
/// Returns 0 for: a smart-working day, a day with nothing entered, and a
/// day whose second entry is stamped but whose second exit is still open
/// (deferred rather than counted as a deficit).
pub fn raw_day_diff(rec: &DayRecord, policy: &WorkPolicy) -> i64 {
    if rec.smartworking {
        return 0;
    }
    if rec.has_no_stamps() && rec.permit_minutes == 0 {
        return 0;
    }
    if rec.entry2.is_some() && rec.exit2.is_none() {
        return 0;
    }

    let mut worked: i64 = 0;

    if let (Some(e1), Some(u1)) = (rec.entry1, rec.exit1) {
        worked += minutes_between(
            cap(e1, policy, StampRole::Entry),
            cap(u1, policy, StampRole::Exit),
        );
    }

    if let (Some(e2), Some(u2)) = (rec.entry2, rec.exit2) {
        worked += minutes_between(
            cap(e2, policy, StampRole::Entry),
            cap(u2, policy, StampRole::Exit),
        );
    }

    // Short lunches are charged: the break is measured on the raw stamps.
    if let (Some(u1), Some(e2)) = (rec.exit1, rec.entry2) {
        let actual_break = minutes_between(u1, e2);
        if actual_break < policy.min_lunch_break {
            worked -= policy.min_lunch_break - actual_break;
        }
    }

    // Permits are excused absence, credited as worked time.
    worked += rec.permit_minutes as i64;

    worked - policy.standard_day
}

/// Threshold-rounded signed day balance.
pub fn day_balance(rec: &DayRecord, policy: &WorkPolicy) -> i64 {
    apply_threshold(raw_day_diff(rec, policy), policy.threshold)
}
