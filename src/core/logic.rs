use crate::core::advisory;
use crate::core::calculator::{balance, rubato, suggest, week};
use crate::core::policy::WorkPolicy;
use crate::models::week::WeekState;
use crate::models::week_view::{DayView, WeekView};

pub struct Core;

impl Core {
    /// One full recomputation pass: every derived value for every day,
    /// plus the week totals. Pure and idempotent, so callers rerun it
    /// after every mutation instead of patching views incrementally.
    pub fn recompute_week(state: &WeekState, policy: &WorkPolicy) -> WeekView {
        let mut view = WeekView::default();

        for (i, rec) in state.days.iter().enumerate() {
            let prior = week::prior_rounded_sum(state, policy, i);

            view.days[i] = DayView {
                balance: balance::day_balance(rec, policy),
                rubato: rubato::day_rubato(rec, policy),
                suggested_exit2: suggest::suggest_exit2(rec, prior, policy),
                lunch_warning: advisory::lunch_warning(rec, policy),
                permit_reminder: advisory::permit_reminder(rec, policy),
                pending_afternoon: advisory::pending_afternoon(rec),
                ordering: advisory::ordering_flags(rec),
            };
        }

        view.total_balance = week::total_balance(state, policy);
        view.total_rubato = week::total_rubato(state, policy);

        view
    }
}
