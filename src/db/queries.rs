use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::reading::InrReading;
use chrono::NaiveDate;
use rusqlite::{Result, Row, params};

pub fn map_reading(row: &Row) -> Result<InrReading> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(InrReading {
        id: row.get("id")?,
        date,
        value: row.get("inr_value")?,
        notes: row.get::<_, Option<String>>("notes")?.unwrap_or_default(),
    })
}

/// Insert a reading and return its row id.
pub fn insert_reading(pool: &DbPool, date: NaiveDate, value: f64, notes: &str) -> AppResult<i64> {
    pool.conn.execute(
        "INSERT INTO inr_readings (date, inr_value, notes) VALUES (?1, ?2, ?3)",
        params![date.format("%Y-%m-%d").to_string(), value, notes],
    )?;
    Ok(pool.conn.last_insert_rowid())
}

/// All readings, newest first. With `since`, only readings strictly after it.
pub fn load_readings_desc(pool: &DbPool, since: Option<NaiveDate>) -> AppResult<Vec<InrReading>> {
    load_readings(pool, since, "DESC")
}

/// All readings, oldest first. With `since`, only readings strictly after it.
pub fn load_readings_asc(pool: &DbPool, since: Option<NaiveDate>) -> AppResult<Vec<InrReading>> {
    load_readings(pool, since, "ASC")
}

fn load_readings(pool: &DbPool, since: Option<NaiveDate>, order: &str) -> AppResult<Vec<InrReading>> {
    let since_str = since
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    let sql = format!(
        "SELECT id, date, inr_value, notes FROM inr_readings
         WHERE (?1 = '' OR date > ?1)
         ORDER BY date {order}, id {order}"
    );

    let mut stmt = pool.conn.prepare(&sql)?;
    let rows = stmt.query_map([since_str], map_reading)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_reading_by_id(pool: &DbPool, id: i64) -> AppResult<usize> {
    let n = pool
        .conn
        .execute("DELETE FROM inr_readings WHERE id = ?1", [id])?;
    Ok(n)
}

/// Delete every row whose date and value both match.
pub fn delete_readings_matching(pool: &DbPool, date: NaiveDate, value: f64) -> AppResult<usize> {
    let n = pool.conn.execute(
        "DELETE FROM inr_readings WHERE date = ?1 AND inr_value = ?2",
        params![date.format("%Y-%m-%d").to_string(), value],
    )?;
    Ok(n)
}

/// `(id, timestamp, operation, target, message)` rows of the internal log.
pub fn load_log(pool: &DbPool) -> Result<Vec<(i64, String, String, String, String)>> {
    let mut stmt = pool.conn.prepare_cached(
        "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
        ))
    })?;

    rows.collect()
}
