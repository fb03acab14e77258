use crate::config::Config;
use crate::core::audit::AuditLogic;
use crate::db::Db;
use crate::errors::AppResult;

/// Print the audit log table.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let database = Db::open_ready(&cfg.database)?;
    AuditLogic::print_log(&database)
}
