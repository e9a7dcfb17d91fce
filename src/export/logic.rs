use super::csv::write_csv;
use super::fs_utils::ensure_writable;
use super::json::write_json;
use super::model::ReadingExport;
use super::xlsx::write_xlsx;
use super::{ExportFormat, notify_export_success};
use crate::db::pool::DbPool;
use crate::db::queries::load_readings_asc;
use crate::errors::AppResult;
use crate::models::reading::TimeRange;
use crate::ui::messages::{info, warning};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export readings inside `range`, oldest first. Returns the row count.
    pub fn export_readings(
        pool: &DbPool,
        format: ExportFormat,
        path: &Path,
        range: TimeRange,
        today: NaiveDate,
        force: bool,
    ) -> AppResult<usize> {
        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let rows: Vec<ReadingExport> = load_readings_asc(pool, range.cutoff(today))?
            .iter()
            .map(ReadingExport::from)
            .collect();

        if rows.is_empty() {
            warning("No readings in the selected range; writing an empty file.");
        }

        info(format!(
            "Exporting {} reading(s) to {}: {}",
            rows.len(),
            format.as_str().to_uppercase(),
            path.display()
        ));

        match format {
            ExportFormat::Csv => write_csv(path, &rows)?,
            ExportFormat::Json => write_json(path, &rows)?,
            ExportFormat::Xlsx => write_xlsx(path, &rows)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), path);
        Ok(rows.len())
    }
}
