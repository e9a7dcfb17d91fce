//! Month grids colored by cycle phase.

use crate::core::cycle::{CyclePattern, shift};
use crate::errors::{AppError, AppResult};
use crate::models::phase::CyclePhase;
use crate::utils::colors::{RESET, bg_hex, fg_hex, paint_on};
use crate::utils::date::{month_name, weekday_from_sunday};
use crate::utils::formatting::{center, pad_right};
use chrono::{Datelike, NaiveDate};

/// Every month is drawn with the same number of week rows.
pub const WEEKS_PER_MONTH: usize = 6;
pub const MONTHS_PER_ROW: usize = 3;
const CELL_WIDTH: usize = 3;
const DAY_HEADER: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub on: &'static str,
    pub off: &'static str,
    pub today: &'static str,
    pub other_month_fg: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        on: "#FFD3D3",
        off: "#D3FFD3",
        today: "#FFFACD",
        other_month_fg: "#b0b0b0",
    };

    pub const DARK: Palette = Palette {
        on: "#A06060",
        off: "#60A060",
        today: "#55502A",
        other_month_fg: "#707070",
    };

    pub fn for_theme(dark: bool) -> Self {
        if dark { Self::DARK } else { Self::LIGHT }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_month: bool,
    /// `None` for the padding days of neighbouring months.
    pub phase: Option<CyclePhase>,
    pub is_today: bool,
}

#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Row-major, Sunday first, always `WEEKS_PER_MONTH * 7` cells.
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn build(
        year: i32,
        month: u32,
        start: NaiveDate,
        pattern: &CyclePattern,
        today: NaiveDate,
    ) -> AppResult<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| AppError::InvalidDate(format!("{year}-{month:02}")))?;
        let grid_start = shift(first, -(weekday_from_sunday(first) as i64))?;

        let cells = (0..WEEKS_PER_MONTH * 7)
            .map(|i| {
                let date = shift(grid_start, i as i64)?;
                let in_month = date.month() == month && date.year() == year;
                Ok(DayCell {
                    date,
                    in_month,
                    phase: in_month.then(|| pattern.phase_of(date, start)),
                    is_today: date == today,
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self { year, month, cells })
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }

    pub fn count(&self, phase: CyclePhase) -> usize {
        self.cells.iter().filter(|c| c.phase == Some(phase)).count()
    }
}

fn render_cell(cell: &DayCell, palette: &Palette, color: bool) -> String {
    let text = format!("{:>2}", cell.date.day());

    if !color {
        if !cell.in_month {
            return " ".repeat(CELL_WIDTH);
        }
        let marker = if cell.is_today {
            '@'
        } else if cell.phase == Some(CyclePhase::Off) {
            '*'
        } else {
            ' '
        };
        return format!("{text}{marker}");
    }

    if !cell.in_month {
        return format!("{}{} {}", fg_hex(palette.other_month_fg), text, RESET);
    }

    let bg = if cell.is_today {
        palette.today
    } else {
        match cell.phase {
            Some(CyclePhase::Off) => palette.off,
            _ => palette.on,
        }
    };
    format!("{} ", paint_on(&text, bg))
}

/// Lines of one month block, each `7 * CELL_WIDTH` columns wide.
pub fn month_lines(grid: &MonthGrid, palette: &Palette, color: bool) -> Vec<String> {
    let width = 7 * CELL_WIDTH;
    let mut lines = Vec::with_capacity(WEEKS_PER_MONTH + 2);

    lines.push(center(month_name(grid.month), width));
    lines.push(
        DAY_HEADER
            .iter()
            .map(|d| pad_right(d, CELL_WIDTH))
            .collect::<String>(),
    );

    for week in grid.weeks() {
        lines.push(
            week.iter()
                .map(|c| render_cell(c, palette, color))
                .collect::<String>(),
        );
    }

    lines
}

pub fn render_month(grid: &MonthGrid, palette: &Palette, color: bool) -> String {
    let mut out = month_lines(grid, palette, color).join("\n");
    out.push('\n');
    out.push_str(&legend(palette, color));
    out
}

/// Twelve months laid out `MONTHS_PER_ROW` per row.
pub fn render_year(
    year: i32,
    start: NaiveDate,
    pattern: &CyclePattern,
    today: NaiveDate,
    palette: &Palette,
    color: bool,
) -> AppResult<String> {
    let mut out = String::new();
    out.push_str(&center(&year.to_string(), MONTHS_PER_ROW * (7 * CELL_WIDTH + 2)));
    out.push_str("\n\n");

    let months: Vec<Vec<String>> = (1..=12)
        .map(|m| {
            MonthGrid::build(year, m, start, pattern, today)
                .map(|g| month_lines(&g, palette, color))
        })
        .collect::<AppResult<_>>()?;

    for row in months.chunks(MONTHS_PER_ROW) {
        for line_idx in 0..row[0].len() {
            let line = row
                .iter()
                .map(|m| m[line_idx].as_str())
                .collect::<Vec<_>>()
                .join("  ");
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
    }

    out.push_str(&legend(palette, color));
    Ok(out)
}

fn legend(palette: &Palette, color: bool) -> String {
    if color {
        format!(
            "{} On-Cycle  {} Off-Cycle  {} Today\n",
            format_args!("{}  {}", bg_hex(palette.on), RESET),
            format_args!("{}  {}", bg_hex(palette.off), RESET),
            format_args!("{}  {}", bg_hex(palette.today), RESET),
        )
    } else {
        "* Off-Cycle  @ Today\n".to_string()
    }
}
