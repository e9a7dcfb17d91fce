use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Schema steps in application order. Each one runs once and is recorded
/// in the `log` table as `migration_applied`.
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20240601_0001_create_inr_readings",
        "Created inr_readings table",
        r#"
        CREATE TABLE IF NOT EXISTS inr_readings (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            inr_value REAL NOT NULL,
            notes     TEXT
        );
        "#,
    ),
    (
        "20240601_0002_index_inr_date",
        "Added date index to inr_readings",
        r#"
        CREATE INDEX IF NOT EXISTS idx_inr_readings_date ON inr_readings(date);
        "#,
    ),
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, version: &str, message: &str, sql: &str) -> Result<()> {
    let batch = format!(
        "BEGIN;\n{sql}\nINSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', '{version}', '{message}');\nCOMMIT;"
    );

    if let Err(e) = conn.execute_batch(&batch) {
        let _ = conn.execute_batch("ROLLBACK;");
        return Err(e);
    }
    Ok(())
}

/// Versions already recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    ensure_log_table(conn)?;
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db(). Returns the number of steps applied.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for (version, message, sql) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }
        apply(conn, version, message, sql)?;
        success(format!("Migration applied: {version}"));
        applied += 1;
    }

    Ok(applied)
}
