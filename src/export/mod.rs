// src/export/mod.rs

pub mod csv;
pub mod json;
mod model;

pub use model::{DayExport, WeekExport};

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use chrono::Local;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Default output name, `WorkTime_YYYY-MM-DD.<ext>` from today's date.
    pub fn default_filename(&self) -> String {
        let date = Local::now().format("%Y-%m-%d");
        format!("WorkTime_{}.{}", date, self.as_str())
    }
}

/// Refuse to clobber an existing file unless `--force` was given.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "File already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }
    Ok(())
}
