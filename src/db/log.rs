use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Record an operation that touched a JSON document. Failing to log only
/// produces a warning; the operation itself already succeeded.
pub fn audit(cfg: &Config, operation: &str, target: &str, message: &str) {
    let result = DbPool::open(cfg).and_then(|pool| ttlog(&pool.conn, operation, target, message));
    if let Err(e) = result {
        warning(format!("Failed to write internal log: {}", e));
    }
}
