use crate::cli::commands::{apply_time_arg, parse_day};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{Db, log as dblog, store};
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::formatting::stamp_or_placeholder;

/// Manage the default-day template: edit, print, apply.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Default {
        entry1,
        exit1,
        entry2,
        exit2,
        print_default,
        apply,
        apply_week,
    } = cmd
    {
        let database = Db::open_ready(&cfg.database)?;
        let mut dflt = store::load_default_day(&database)?;

        let mut edited = false;
        edited |= apply_time_arg(&mut dflt.entry1, entry1.as_ref())?;
        edited |= apply_time_arg(&mut dflt.exit1, exit1.as_ref())?;
        edited |= apply_time_arg(&mut dflt.entry2, entry2.as_ref())?;
        edited |= apply_time_arg(&mut dflt.exit2, exit2.as_ref())?;

        if edited {
            store::save_default_day(&database, &dflt)?;
            dblog::ttlog(&database, "default", "template", "template saved")?;
            messages::success("Default-day template saved");
        }

        if *print_default {
            println!(
                "Template: {} {} | {} {}",
                stamp_or_placeholder(dflt.entry1),
                stamp_or_placeholder(dflt.exit1),
                stamp_or_placeholder(dflt.entry2),
                stamp_or_placeholder(dflt.exit2),
            );
        }

        if let Some(code) = apply {
            let wd = parse_day(code)?;
            let mut week = store::load_week(&database)?;
            week.apply_default_to_day(wd, &dflt);
            store::save_week(&database, &week)?;
            dblog::ttlog(&database, "default", wd.display_name(), "template applied")?;
            messages::success(format!(
                "Template applied to {} (permit kept)",
                wd.display_name()
            ));
        }

        if *apply_week {
            let mut week = store::load_week(&database)?;
            week.apply_default_to_week(&dflt);
            store::save_week(&database, &week)?;
            dblog::ttlog(&database, "default", "week", "template applied to week")?;
            messages::success("Template applied to the whole week (permits reset)");
        }

        if !edited && !*print_default && apply.is_none() && !*apply_week {
            messages::info("Nothing to do: pass stamps to edit, --print, --apply or --apply-week");
        }
    }

    Ok(())
}
