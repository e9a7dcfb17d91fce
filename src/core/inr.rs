use crate::config::InrConfig;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_reading_by_id, delete_readings_matching, insert_reading, load_readings_asc,
    load_readings_desc,
};
use crate::errors::{AppError, AppResult};
use crate::models::reading::{InrReading, InrStats, InrStatus, TimeRange};
use crate::utils::date::{format_iso, parse_date, today};
use chrono::NaiveDate;

pub const CHART_HEIGHT: usize = 12;
/// Most recent readings kept on one chart.
pub const CHART_MAX_POINTS: usize = 40;
const CHART_MARGIN: f64 = 0.5;

/// High-level business logic for the `inr` command group.
pub struct InrLogic;

/// Parse a user supplied INR value.
pub fn parse_value(raw: &str) -> AppResult<f64> {
    let v: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidValue(format!("'{}' is not a number", raw.trim())))?;
    if !v.is_finite() || v < 0.0 {
        return Err(AppError::InvalidValue(format!("'{}' is not a valid INR value", raw.trim())));
    }
    Ok(v)
}

/// `YYYY-MM-DD`, or today when absent.
pub fn parse_reading_date(raw: Option<&str>) -> AppResult<NaiveDate> {
    match raw {
        None => Ok(today()),
        Some(s) => parse_date(s)
            .ok_or_else(|| AppError::InvalidDate(format!("'{}' (expected YYYY-MM-DD)", s.trim()))),
    }
}

impl InrLogic {
    /// Store a reading and classify it against the configured range.
    pub fn add(
        pool: &DbPool,
        range: &InrConfig,
        date: NaiveDate,
        value: f64,
        notes: &str,
    ) -> AppResult<(i64, InrStatus)> {
        let id = insert_reading(pool, date, value, notes.trim())?;
        Ok((id, InrStatus::classify(value, range.low, range.high)))
    }

    /// Readings inside `range`, newest first.
    pub fn list(pool: &DbPool, range: TimeRange, today: NaiveDate) -> AppResult<Vec<InrReading>> {
        load_readings_desc(pool, range.cutoff(today))
    }

    /// Readings inside `range`, oldest first.
    pub fn list_asc(pool: &DbPool, range: TimeRange, today: NaiveDate) -> AppResult<Vec<InrReading>> {
        load_readings_asc(pool, range.cutoff(today))
    }

    pub fn delete_matching(pool: &DbPool, date: NaiveDate, value: f64) -> AppResult<usize> {
        delete_readings_matching(pool, date, value)
    }

    pub fn delete_by_id(pool: &DbPool, id: i64) -> AppResult<usize> {
        let n = delete_reading_by_id(pool, id)?;
        if n == 0 {
            return Err(AppError::NotFound(format!("INR reading #{id}")));
        }
        Ok(n)
    }
}

/// Summary of `readings`. `latest` is the reading with the greatest date.
pub fn stats(readings: &[InrReading], range: &InrConfig) -> InrStats {
    if readings.is_empty() {
        return InrStats {
            count: 0,
            min: 0.0,
            max: 0.0,
            mean: 0.0,
            latest: None,
            in_range: 0,
        };
    }

    let values = readings.iter().map(|r| r.value);
    let min = values.clone().fold(f64::INFINITY, f64::min);
    let max = values.clone().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.sum::<f64>() / readings.len() as f64;
    let in_range = readings
        .iter()
        .filter(|r| InrStatus::classify(r.value, range.low, range.high) == InrStatus::Normal)
        .count();
    let latest = readings
        .iter()
        .max_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)))
        .cloned();

    InrStats {
        count: readings.len(),
        min,
        max,
        mean,
        latest,
        in_range,
    }
}

/// Vertical limits of the chart: the data padded to always include the
/// therapeutic range.
pub fn chart_limits(readings: &[InrReading], range: &InrConfig) -> (f64, f64) {
    let min = readings
        .iter()
        .map(|r| r.value)
        .fold(f64::INFINITY, f64::min)
        .min(range.low);
    let max = readings
        .iter()
        .map(|r| r.value)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(range.high);
    (min - CHART_MARGIN, max + CHART_MARGIN)
}

/// Text chart of readings given oldest first. Range bounds are drawn as
/// dashed rows.
pub fn chart(readings: &[InrReading], range: &InrConfig) -> String {
    if readings.is_empty() {
        return "No readings to chart.".to_string();
    }

    let shown = &readings[readings.len().saturating_sub(CHART_MAX_POINTS)..];
    let (lo, hi) = chart_limits(shown, range);
    let step = (hi - lo) / (CHART_HEIGHT - 1) as f64;
    let row_of = |v: f64| (((hi - v) / step).round() as usize).min(CHART_HEIGHT - 1);

    let low_row = row_of(range.low);
    let high_row = row_of(range.high);
    let points: Vec<usize> = shown.iter().map(|r| row_of(r.value)).collect();

    let mut out = String::new();
    for row in 0..CHART_HEIGHT {
        let y = hi - row as f64 * step;
        out.push_str(&format!("{:>5.2} │", y));
        let fill = if row == low_row || row == high_row { '-' } else { ' ' };
        for p in &points {
            if *p == row {
                out.push_str(" ● ");
            } else {
                out.extend([fill, fill, fill]);
            }
        }
        if row == high_row {
            out.push_str(&format!("  high {:.1}", range.high));
        } else if row == low_row {
            out.push_str(&format!("  low {:.1}", range.low));
        }
        out.push('\n');
    }

    out.push_str(&format!("      └{}\n", "─".repeat(points.len() * 3)));
    if let (Some(first), Some(last)) = (shown.first(), shown.last()) {
        out.push_str(&format!(
            "       {} → {} ({} readings)\n",
            format_iso(first.date),
            format_iso(last.date),
            shown.len()
        ));
    }
    out
}
