use chrono::{Months, NaiveDate};
use serde::Serialize;

/// One INR measurement row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InrReading {
    pub id: i64,
    pub date: NaiveDate,
    pub value: f64,
    pub notes: String,
}

/// Where a value sits relative to the therapeutic range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InrStatus {
    Low,
    Normal,
    High,
}

impl InrStatus {
    /// Range bounds are inclusive: `low <= v <= high` is Normal.
    pub fn classify(value: f64, low: f64, high: f64) -> Self {
        if value < low {
            InrStatus::Low
        } else if value > high {
            InrStatus::High
        } else {
            InrStatus::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InrStatus::Low => "low",
            InrStatus::Normal => "normal",
            InrStatus::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TimeRange {
    #[default]
    All,
    #[value(name = "1m")]
    OneMonth,
    #[value(name = "3m")]
    ThreeMonths,
    #[value(name = "6m")]
    SixMonths,
    #[value(name = "1y")]
    OneYear,
}

impl TimeRange {
    fn months(&self) -> Option<u32> {
        match self {
            TimeRange::All => None,
            TimeRange::OneMonth => Some(1),
            TimeRange::ThreeMonths => Some(3),
            TimeRange::SixMonths => Some(6),
            TimeRange::OneYear => Some(12),
        }
    }

    /// Readings must be strictly newer than this date to be shown.
    pub fn cutoff(&self, today: NaiveDate) -> Option<NaiveDate> {
        self.months()
            .and_then(|m| today.checked_sub_months(Months::new(m)))
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::All => "all",
            TimeRange::OneMonth => "1 month",
            TimeRange::ThreeMonths => "3 months",
            TimeRange::SixMonths => "6 months",
            TimeRange::OneYear => "1 year",
        }
    }
}

/// Summary over a set of readings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InrStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub latest: Option<InrReading>,
    pub in_range: usize,
}

impl InrStats {
    pub fn in_range_pct(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.in_range as f64 * 100.0 / self.count as f64
        }
    }
}
