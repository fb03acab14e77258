use crate::db::Db;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::params;

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Write an internal log line into the `log` table.
pub fn ttlog(db: &Db, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    db.conn
        .prepare_cached(
            "INSERT INTO log (date, operation, target, message)
             VALUES (?1, ?2, ?3, ?4)",
        )?
        .execute(params![now, operation, target, message])?;

    Ok(())
}

pub fn read_log(db: &Db) -> AppResult<Vec<LogEntry>> {
    let mut stmt = db
        .conn
        .prepare_cached("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        let raw_date: String = row.get(1)?;
        let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
            .map(|dt| dt.format("%FT%T%:z").to_string())
            .unwrap_or(raw_date);

        Ok(LogEntry {
            id: row.get(0)?,
            date,
            operation: row.get(2)?,
            target: row.get(3)?,
            message: row.get(4)?,
        })
    })?;

    let mut entries = Vec::new();
    for r in rows {
        entries.push(r?);
    }
    Ok(entries)
}
