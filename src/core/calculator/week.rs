//! Week reductions over per-day results.

use crate::core::calculator::{balance, rubato};
use crate::core::policy::WorkPolicy;
use crate::models::week::WeekState;

/// Sum of the five rounded day balances. Days with nothing entered are
/// balance-neutral, so no day is excluded.
pub fn total_balance(week: &WeekState, policy: &WorkPolicy) -> i64 {
    week.days
        .iter()
        .map(|d| balance::day_balance(d, policy))
        .sum()
}

pub fn total_rubato(week: &WeekState, policy: &WorkPolicy) -> i64 {
    week.days.iter().map(|d| rubato::day_rubato(d, policy)).sum()
}

/// Rounded balance accumulated before `index` (exclusive). This is what
/// the suggestion solver settles against.
pub fn prior_rounded_sum(week: &WeekState, policy: &WorkPolicy, index: usize) -> i64 {
    week.days[..index]
        .iter()
        .map(|d| balance::day_balance(d, policy))
        .sum()
}
