use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db;
use crate::errors::AppResult;
use crate::ui::messages;

/// Initialize configuration and database.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    let database = db::Db::open(&cfg.database)?;
    db::log::ttlog(&database, "init", "", "database initialized")?;

    messages::success(format!("Database ready: {}", cfg.database));
    if !cli.test {
        messages::info(format!(
            "Configuration written to {}",
            Config::config_file().display()
        ));
    }
    Ok(())
}
