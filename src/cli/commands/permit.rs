use crate::cli::commands::parse_day;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::policy::WorkPolicy;
use crate::db::{Db, log as dblog, store};
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::mins2readable;

/// Step a day's permit minutes up or down.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Permit { day, op } = cmd {
        let wd = parse_day(day)?;
        let policy = WorkPolicy::from_config(cfg);

        let database = Db::open_ready(&cfg.database)?;
        let mut week = store::load_week(&database)?;

        let rec = week.day_mut(wd);
        match op.as_str() {
            "add" => rec.add_permit(policy.permit_step),
            "del" => rec.remove_permit(policy.permit_step),
            other => return Err(AppError::InvalidPermitOp(other.to_string())),
        }
        let permit = rec.permit_minutes;

        store::save_week(&database, &week)?;
        dblog::ttlog(
            &database,
            "permit",
            wd.display_name(),
            &format!("permit {} -> {}'", op, permit),
        )?;

        messages::success(format!(
            "{}: permesso {}",
            wd.display_name(),
            mins2readable(permit as i64, false, true)
        ));
    }

    Ok(())
}
