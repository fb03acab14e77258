//! Blob store: the week and the default-day template, serialized as JSON
//! under two fixed keys. The core never sees the storage medium; it gets
//! the last stored value, or an empty state when nothing was stored yet.

use crate::db::Db;
use crate::errors::{AppError, AppResult};
use crate::models::week::{DefaultDayRecord, WeekState};
use rusqlite::OptionalExtension;
use rusqlite::params;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const WEEK_KEY: &str = "workTimeData";
pub const DEFAULT_DAY_KEY: &str = "defaultDayData";

fn get_blob<T: DeserializeOwned + Default>(db: &Db, key: &str) -> AppResult<T> {
    let raw: Option<String> = db
        .conn
        .prepare_cached("SELECT value FROM store WHERE key = ?1")?
        .query_row(params![key], |row| row.get(0))
        .optional()?;

    match raw {
        Some(json) => {
            serde_json::from_str(&json).map_err(|e| AppError::Store(format!("{key}: {e}")))
        }
        None => Ok(T::default()),
    }
}

fn put_blob<T: Serialize>(db: &Db, key: &str, value: &T) -> AppResult<()> {
    let json = serde_json::to_string(value).map_err(|e| AppError::Store(format!("{key}: {e}")))?;
    db.conn
        .prepare_cached(
            "INSERT INTO store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )?
        .execute(params![key, json])?;
    Ok(())
}

pub fn load_week(db: &Db) -> AppResult<WeekState> {
    get_blob(db, WEEK_KEY)
}

pub fn save_week(db: &Db, week: &WeekState) -> AppResult<()> {
    put_blob(db, WEEK_KEY, week)
}

pub fn load_default_day(db: &Db) -> AppResult<DefaultDayRecord> {
    get_blob(db, DEFAULT_DAY_KEY)
}

pub fn save_default_day(db: &Db, dflt: &DefaultDayRecord) -> AppResult<()> {
    put_blob(db, DEFAULT_DAY_KEY, dflt)
}
