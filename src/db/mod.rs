//! SQLite persistence. The week and the default-day template live as two
//! JSON blobs in a key/value table; a `log` table keeps the audit trail.

pub mod initialize;
pub mod log;
pub mod store;

use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Open and make sure the schema exists. Commands use this so a DB
    /// file created by an older build (or by `--db` pointing somewhere
    /// fresh) is usable without an explicit `init`.
    pub fn open_ready(path: &str) -> AppResult<Self> {
        let db = Self::open(path)?;
        initialize::init_db(&db.conn)?;
        Ok(db)
    }
}
