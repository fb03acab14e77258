use crate::cli::commands::parse_day;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{Db, log as dblog, store};
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

/// Reset a single day or the whole week. The default-day template is
/// stored under its own key and survives.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { day, week } = cmd {
        let database = Db::open_ready(&cfg.database)?;
        let mut state = store::load_week(&database)?;

        match (day, *week) {
            (Some(code), false) => {
                let wd = parse_day(code)?;
                state.clear_day(wd);
                store::save_week(&database, &state)?;
                dblog::ttlog(&database, "clear", wd.display_name(), "day cleared")?;
                messages::success(format!("{} cleared", wd.display_name()));
            }
            (None, true) => {
                state.clear_all();
                store::save_week(&database, &state)?;
                dblog::ttlog(&database, "clear", "week", "week cleared")?;
                messages::success("Week cleared (default-day template kept)");
            }
            (Some(_), true) => {
                return Err(AppError::Other(
                    "Use either a day or --week, not both".to_string(),
                ));
            }
            (None, false) => {
                return Err(AppError::Other(
                    "Nothing to clear: give a day or --week".to_string(),
                ));
            }
        }
    }

    Ok(())
}
