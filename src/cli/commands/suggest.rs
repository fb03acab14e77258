use crate::cli::commands::parse_day;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::{suggest, week as week_calc};
use crate::core::policy::WorkPolicy;
use crate::db::{Db, store};
use crate::errors::AppResult;
use crate::ui::messages;

/// Print the suggested second exit for one day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Suggest { day } = cmd {
        let wd = parse_day(day)?;
        let policy = WorkPolicy::from_config(cfg);

        let database = Db::open_ready(&cfg.database)?;
        let week = store::load_week(&database)?;

        let prior = week_calc::prior_rounded_sum(&week, &policy, wd.index());
        match suggest::suggest_exit2(week.day(wd), prior, &policy) {
            Some(t) => println!("💡 {}: esci alle {}", wd.display_name(), t),
            None => messages::info(format!(
                "{}: no suggestion (needs entry1, exit1, entry2 stamped and exit2 open)",
                wd.display_name()
            )),
        }
    }

    Ok(())
}
