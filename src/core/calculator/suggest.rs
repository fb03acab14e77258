//! Second-exit suggestion: back-solve the exit time that closes the day
//! at zero, after settling the week-to-date balance.

use crate::core::calculator::balance::{StampRole, cap};
use crate::core::policy::WorkPolicy;
use crate::models::day_record::DayRecord;
use crate::models::time_of_day::TimeOfDay;
use crate::utils::time::minutes_between;

/// Suggested second exit for a day whose afternoon is still open.
///
/// Requires `entry1`, `exit1` and `entry2` stamped and `exit2` absent;
/// otherwise there is nothing to solve and the result is `None` (the
/// caller renders no placeholder, not 00:00).
///
/// `prior_rounded_sum` is the sum of the *rounded* balances of the days
/// before this one. Rounded, because those days already settled at their
/// displayed value; the figures for the day being solved stay unrounded
/// so the display-time rounding doesn't compound through the solve.
pub fn suggest_exit2(
    rec: &DayRecord,
    prior_rounded_sum: i64,
    policy: &WorkPolicy,
) -> Option<TimeOfDay> {
    if rec.smartworking {
        return None;
    }
    let (entry1, exit1, entry2) = match (rec.entry1, rec.exit1, rec.entry2) {
        (Some(e1), Some(u1), Some(e2)) => (e1, u1, e2),
        _ => return None,
    };
    if rec.exit2.is_some() {
        return None;
    }

    let first_slot = minutes_between(
        cap(entry1, policy, StampRole::Entry),
        cap(exit1, policy, StampRole::Exit),
    );

    // Short-lunch charge that will apply once the day closes.
    let actual_break = minutes_between(exit1, entry2);
    let lunch_adjustment = (policy.min_lunch_break - actual_break).max(0);

    // Prior surplus pulls the target earlier, prior deficit pushes it later.
    let needed = policy.standard_day - first_slot + lunch_adjustment
        - rec.permit_minutes as i64
        - prior_rounded_sum;

    let candidate = cap(entry2, policy, StampRole::Entry).minutes() + needed.max(0);

    // Ceiling first, then the floor: 16:30 wins over the window cap.
    let capped = candidate
        .min(policy.window_end.minutes())
        .max(policy.min_suggested_exit.minutes());

    // Round down: never promise credit for minutes the badge would steal.
    let rounded = capped / policy.threshold * policy.threshold;

    TimeOfDay::from_minutes(rounded)
}
