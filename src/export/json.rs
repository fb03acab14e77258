use crate::errors::{AppError, AppResult};
use crate::export::WeekExport;
use std::path::Path;

/// Scrive la settimana in JSON formattato.
pub fn write_json(path: &Path, week: &WeekExport) -> AppResult<()> {
    let json =
        serde_json::to_string_pretty(week).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
