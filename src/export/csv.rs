use super::model::{HEADERS, ReadingExport, row_to_strings};
use crate::errors::AppResult;
use csv::Writer;
use std::path::Path;

pub(crate) fn write_csv(path: &Path, rows: &[ReadingExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(std::io::Error::other)?;

    wtr.write_record(HEADERS).map_err(std::io::Error::other)?;
    for r in rows {
        wtr.write_record(row_to_strings(r))
            .map_err(std::io::Error::other)?;
    }

    wtr.flush()?;
    Ok(())
}
