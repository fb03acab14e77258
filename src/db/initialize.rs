use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the schema if missing. Two tables only: the blob store and the
/// audit log.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS store (
             key   TEXT PRIMARY KEY,
             value TEXT NOT NULL
         );
         CREATE TABLE IF NOT EXISTS log (
             id        INTEGER PRIMARY KEY AUTOINCREMENT,
             date      TEXT NOT NULL,
             operation TEXT NOT NULL,
             target    TEXT NOT NULL DEFAULT '',
             message   TEXT NOT NULL DEFAULT ''
         );",
    )?;
    Ok(())
}
