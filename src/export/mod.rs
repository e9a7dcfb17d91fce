//! INR reading export to CSV, JSON and XLSX.

mod csv;
mod fs_utils;
mod json;
pub mod logic;
mod model;
mod xlsx;

pub use logic::ExportLogic;
pub use model::ReadingExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// File written when no `--file` is given.
    pub fn default_file(&self) -> String {
        format!("inr_data_export.{}", self.as_str())
    }
}
