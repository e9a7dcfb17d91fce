use super::model::{HEADERS, ReadingExport};
use crate::errors::{AppError, AppResult};
use rust_xlsxwriter::{
    Color, ExcelDateTime, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HEADER_BG: u32 = 0x2F75B5;
const BAND_1: u32 = 0xEAF3FB;
const BAND_2: u32 = 0xFFFFFF;

/// Styled workbook: banded rows, frozen header, real date cells and
/// auto-sized columns.
pub(crate) fn write_xlsx(path: &Path, rows: &[ReadingExport]) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("INR").map_err(to_app_error)?;

    if rows.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_app_error)?;
        workbook.save(path).map_err(to_app_error)?;
        return Ok(());
    }

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(HEADER_BG))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }
    worksheet.set_freeze_panes(1, 0).map_err(to_app_error)?;

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    for (i, r) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        let bg = Color::RGB(if i % 2 == 0 { BAND_1 } else { BAND_2 });

        write_date(worksheet, row, 0, &r.date, bg)?;

        let num = Format::new()
            .set_align(FormatAlign::Right)
            .set_num_format("0.00")
            .set_background_color(bg)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);
        worksheet
            .write_with_format(row, 1, r.inr_value, &num)
            .map_err(to_app_error)?;

        let text = Format::new()
            .set_background_color(bg)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);
        worksheet
            .write_with_format(row, 2, r.notes.as_str(), &text)
            .map_err(to_app_error)?;

        widths[0] = widths[0].max(UnicodeWidthStr::width(r.date.as_str()));
        widths[1] = widths[1].max(format!("{:.2}", r.inr_value).len());
        widths[2] = widths[2].max(UnicodeWidthStr::width(r.notes.as_str()));
    }

    for (c, w) in widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;
    Ok(())
}

/// ISO dates become Excel dates; anything else is written as text.
fn write_date(ws: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match ExcelDateTime::parse_from_str(s) {
        Ok(dt) => {
            let fmt = base.set_num_format("yyyy-mm-dd");
            ws.write_with_format(row, col, &dt, &fmt)
                .map_err(to_app_error)?;
        }
        Err(_) => {
            ws.write_with_format(row, col, s, &base)
                .map_err(to_app_error)?;
        }
    }
    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
