use crate::models::reading::InrReading;
use crate::utils::date::format_iso;
use serde::Serialize;

pub const HEADERS: [&str; 3] = ["Date", "INR Value", "Notes"];

/// Flat export row. Field names match the exported column headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingExport {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "INR Value")]
    pub inr_value: f64,
    #[serde(rename = "Notes")]
    pub notes: String,
}

impl From<&InrReading> for ReadingExport {
    fn from(r: &InrReading) -> Self {
        Self {
            date: format_iso(r.date),
            inr_value: r.value,
            notes: r.notes.clone(),
        }
    }
}

pub(crate) fn row_to_strings(r: &ReadingExport) -> [String; 3] {
    [r.date.clone(), r.inr_value.to_string(), r.notes.clone()]
}
