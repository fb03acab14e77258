use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::policy::WorkPolicy;
use crate::db::{Db, log as dblog, store};
use crate::errors::AppResult;
use crate::export::{self, ExportFormat, WeekExport};
use crate::utils::path::expand_tilde;

/// Export the week to CSV or JSON.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let database = Db::open_ready(&cfg.database)?;
        let week = store::load_week(&database)?;

        let policy = WorkPolicy::from_config(cfg);
        let view = Core::recompute_week(&week, &policy);
        let doc = WeekExport::build(&week, &view);

        let path = match file {
            Some(f) => expand_tilde(f),
            None => std::path::PathBuf::from(format.default_filename()),
        };

        export::ensure_writable(&path, *force)?;

        match format {
            ExportFormat::Csv => export::csv::write_csv(&path, &doc)?,
            ExportFormat::Json => export::json::write_json(&path, &doc)?,
        }

        dblog::ttlog(
            &database,
            "export",
            format.as_str(),
            &path.to_string_lossy(),
        )?;
        export::notify_export_success(format.as_str().to_uppercase().as_str(), &path);
    }

    Ok(())
}
