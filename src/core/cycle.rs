//! Rotating off/on shift arithmetic.
//!
//! A cycle starts with `off_days` rest days followed by `on_days` work days.
//! The position of any date is its day offset from the cycle start taken
//! modulo the period, so dates before the start wrap backwards correctly.

use crate::config::CycleConfig;
use crate::errors::{AppError, AppResult};
use crate::models::phase::{CycleDay, CyclePhase};
use crate::utils::date;
use chrono::{Duration, NaiveDate};

/// Number of days shown by the lookahead list.
pub const LOOKAHEAD_DAYS: u32 = 8;
/// Upper bound for a lookahead list, about ten years.
pub const MAX_LOOKAHEAD_DAYS: u32 = 3660;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclePattern {
    pub off_days: u32,
    pub on_days: u32,
}

impl Default for CyclePattern {
    fn default() -> Self {
        Self {
            off_days: 4,
            on_days: 4,
        }
    }
}

impl CyclePattern {
    pub fn from_config(c: &CycleConfig) -> AppResult<Self> {
        Self::new(c.off_days, c.on_days)
    }

    pub fn new(off_days: u32, on_days: u32) -> AppResult<Self> {
        if off_days == 0 || on_days == 0 {
            return Err(AppError::Config(format!(
                "cycle blocks must be at least one day (off={off_days}, on={on_days})"
            )));
        }
        Ok(Self { off_days, on_days })
    }

    pub fn period(&self) -> u32 {
        self.off_days + self.on_days
    }

    /// 0-based offset of `date` inside the cycle that begins at `start`.
    pub fn position(&self, date: NaiveDate, start: NaiveDate) -> u32 {
        let delta = (date - start).num_days();
        delta.rem_euclid(self.period() as i64) as u32
    }

    pub fn phase_of(&self, date: NaiveDate, start: NaiveDate) -> CyclePhase {
        if self.position(date, start) < self.off_days {
            CyclePhase::Off
        } else {
            CyclePhase::On
        }
    }

    pub fn day(&self, date: NaiveDate, start: NaiveDate) -> CycleDay {
        let position = self.position(date, start);
        let (phase, day_in_phase) = if position < self.off_days {
            (CyclePhase::Off, position + 1)
        } else {
            (CyclePhase::On, position - self.off_days + 1)
        };
        CycleDay {
            date,
            phase,
            day_in_phase,
            position,
        }
    }

    /// `days` consecutive days beginning at `start`.
    pub fn lookahead(&self, start: NaiveDate, days: u32) -> AppResult<Vec<CycleDay>> {
        if days > MAX_LOOKAHEAD_DAYS {
            return Err(AppError::InvalidInput(format!(
                "at most {MAX_LOOKAHEAD_DAYS} days can be listed (got {days})"
            )));
        }
        (0..days)
            .map(|i| shift(start, i as i64).map(|d| self.day(d, start)))
            .collect()
    }

    /// First day on or after `from` that opens an off block.
    pub fn next_off_start(&self, from: NaiveDate, start: NaiveDate) -> AppResult<NaiveDate> {
        match self.position(from, start) {
            0 => Ok(from),
            pos => shift(from, (self.period() - pos) as i64),
        }
    }
}

/// `date` moved by `days`, or `InvalidDate` past the end of the calendar.
pub(crate) fn shift(date: NaiveDate, days: i64) -> AppResult<NaiveDate> {
    date.checked_add_signed(Duration::days(days)).ok_or_else(|| {
        AppError::InvalidDate(format!(
            "{} moved by {days} day(s) is outside the supported calendar",
            date::format_iso(date)
        ))
    })
}

/// Default 4-on/4-off rule: `((date - start).days mod 8) in {0,1,2,3}`.
pub fn is_off_day(date: NaiveDate, start: NaiveDate) -> bool {
    CyclePattern::default().phase_of(date, start).is_off()
}

/// Parse a cycle start date in ISO or `MM/DD/YYYY` form.
pub fn parse_start_date(s: &str) -> AppResult<NaiveDate> {
    date::parse_flexible(s).ok_or_else(|| {
        AppError::InvalidDate(format!(
            "'{}' (use YYYY-MM-DD or MM/DD/YYYY)",
            s.trim()
        ))
    })
}

/// `Monday, Jan 01, 2024 – Off day 1`
pub fn describe(day: &CycleDay) -> String {
    format!(
        "{} – {} day {}",
        date::format_long(day.date),
        day.phase.label(),
        day.day_in_phase
    )
}
