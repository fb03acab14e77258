use crate::cli::commands::{apply_time_arg, parse_day};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::policy::WorkPolicy;
use crate::db::{Db, log as dblog, store};
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::formatting::stamp_or_placeholder;
use crate::utils::mins2readable;

/// Edit one weekday's record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        day,
        smart,
        no_smart,
        entry1,
        exit1,
        entry2,
        exit2,
    } = cmd
    {
        let wd = parse_day(day)?;

        let has_time_args =
            entry1.is_some() || exit1.is_some() || entry2.is_some() || exit2.is_some();

        let database = Db::open_ready(&cfg.database)?;
        let mut week = store::load_week(&database)?;

        {
            let rec = week.day_mut(wd);

            if *smart {
                rec.set_smartworking(true);
            }
            if *no_smart {
                rec.set_smartworking(false);
            }

            // A smart-working day carries no stamps.
            if rec.smartworking && has_time_args {
                return Err(AppError::Other(format!(
                    "{} is a smart-working day: stamps cannot be set (use --no-smart first)",
                    wd.display_name()
                )));
            }

            apply_time_arg(&mut rec.entry1, entry1.as_ref())?;
            apply_time_arg(&mut rec.exit1, exit1.as_ref())?;
            apply_time_arg(&mut rec.entry2, entry2.as_ref())?;
            apply_time_arg(&mut rec.exit2, exit2.as_ref())?;
        }

        store::save_week(&database, &week)?;

        let rec_msg = {
            let r = week.day(wd);
            format!(
                "sw={} e1={} u1={} e2={} u2={} permit={}'",
                r.smartworking,
                stamp_or_placeholder(r.entry1),
                stamp_or_placeholder(r.exit1),
                stamp_or_placeholder(r.entry2),
                stamp_or_placeholder(r.exit2),
                r.permit_minutes,
            )
        };
        dblog::ttlog(&database, "set", wd.display_name(), &rec_msg)?;

        // Immediate feedback: the day's recomputed figures and advisories.
        let policy = WorkPolicy::from_config(cfg);
        let view = Core::recompute_week(&week, &policy);
        let dv = &view.days[wd.index()];

        messages::success(format!(
            "{}: scarto {} | rubati {}",
            wd.display_name(),
            mins2readable(dv.balance, true, true),
            mins2readable(dv.rubato, false, true),
        ));

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
            let hint = match dv.suggested_exit2 {
                Some(t) => format!("afternoon still open, suggested exit {t}"),
                None => "afternoon still open".to_string(),
            };
            messages::info(format!("{}: {}", wd.display_name(), hint));
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
