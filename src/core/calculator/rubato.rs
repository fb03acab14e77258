//! "Rubato": minutes lost because stamps don't land on a 5-minute mark.
//! The badge system rounds entries up and exits down, always against the
//! worker; this tracks how much that costs, separately from the balance.

use crate::core::policy::WorkPolicy;
use crate::models::day_record::DayRecord;
use crate::models::time_of_day::TimeOfDay;

fn entry_stolen(t: TimeOfDay, step: i64) -> i64 {
    (step - t.minutes() % step) % step
}

fn exit_stolen(t: TimeOfDay, step: i64) -> i64 {
    t.minutes() % step
}

/// Rounding loss for one day, in minutes. A slot contributes only when
/// both of its stamps are present; the two slots are independent.
pub fn day_rubato(rec: &DayRecord, policy: &WorkPolicy) -> i64 {
    if rec.smartworking || rec.has_no_stamps() {
        return 0;
    }

    let step = policy.threshold;
    let mut total = 0;

    if let (Some(e1), Some(u1)) = (rec.entry1, rec.exit1) {
        total += entry_stolen(e1, step);
        total += exit_stolen(u1, step);
    }

    if let (Some(e2), Some(u2)) = (rec.entry2, rec.exit2) {
        total += entry_stolen(e2, step);
        total += exit_stolen(u2, step);
    }

    total
}
