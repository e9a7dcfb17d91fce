use super::model::ReadingExport;
use crate::errors::AppResult;
use std::fs;
use std::path::Path;

pub(crate) fn write_json(path: &Path, rows: &[ReadingExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    fs::write(path, json)?;
    Ok(())
}
