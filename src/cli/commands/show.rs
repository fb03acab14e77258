use crate::config::Config;
use crate::core::logic::Core;
use crate::core::policy::WorkPolicy;
use crate::db::{Db, store};
use crate::errors::AppResult;
use crate::models::day_record::Weekday;
use crate::ui::messages;
use crate::utils::colors::{colorize_balance, colorize_optional};
use crate::utils::formatting::stamp_or_placeholder;
use crate::utils::mins2readable;
use crate::utils::table::Table;

/// Print the week table with all derived values.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let database = Db::open_ready(&cfg.database)?;
    let week = store::load_week(&database)?;

    let policy = WorkPolicy::from_config(cfg);
    let view = Core::recompute_week(&week, &policy);

    let mut table = Table::new(vec![
        "Giorno",
        "SW",
        "Entrata 1",
        "Uscita 1",
        "Entrata 2",
        "Uscita 2",
        "Permesso",
        "Scarto",
        "Rubati",
        "Suggerita",
    ]);

    for wd in Weekday::ALL {
        let rec = week.day(wd);
        let dv = &view.days[wd.index()];

        let suggestion = match dv.suggested_exit2 {
            Some(t) => format!("💡 {t}"),
            None => String::new(),
        };

        table.add_row(vec![
            wd.display_name().to_string(),
            if rec.smartworking { "Sì" } else { "No" }.to_string(),
            colorize_optional(&stamp_or_placeholder(rec.entry1)),
            colorize_optional(&stamp_or_placeholder(rec.exit1)),
            colorize_optional(&stamp_or_placeholder(rec.entry2)),
            colorize_optional(&stamp_or_placeholder(rec.exit2)),
            colorize_optional(&mins2readable(rec.permit_minutes as i64, false, true)),
            colorize_balance(&mins2readable(dv.balance, true, true), dv.balance),
            colorize_optional(&mins2readable(dv.rubato, false, true)),
            suggestion,
        ]);
    }

    println!(
        "📒 Settimana (fascia {}-{})\n",
        policy.window_start, policy.window_end
    );
    print!("{}", table.render());
    println!(
        "\nTOTALE scarto: {}   rubati: {}",
        colorize_balance(
            &mins2readable(view.total_balance, true, true),
            view.total_balance
        ),
        mins2readable(view.total_rubato, false, true),
    );

    // Advisory lines, one per flagged day.
    for wd in Weekday::ALL {
        let dv = &view.days[wd.index()];
        if let Some(w) = dv.lunch_warning {
            messages::warning(format!("{}: {}", wd.display_name(), w.message()));
        }
        if dv.ordering.any() {
            messages::warning(format!(
                "{}: stamps out of order, check the times",
                wd.display_name()
            ));
        }
        if dv.pending_afternoon {
            messages::info(format!(
                "{}: afternoon still open, balance deferred",
                wd.display_name()
            ));
        }
        if dv.permit_reminder {
            messages::info(format!(
                "{}: stamps outside the expected spans, consider a permit",
                wd.display_name()
            ));
        }
    }

    Ok(())
}
