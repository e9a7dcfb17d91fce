use super::cycle::resolve_start;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{MonthGrid, Palette, render_month, render_year};
use crate::core::cycle::CyclePattern;
use crate::errors::AppResult;
use crate::models::phase::CyclePhase;
use crate::utils::date::today;
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar {
        start,
        year,
        month,
        no_color,
    } = cmd
    {
        let pattern = CyclePattern::from_config(&cfg.cycle)?;
        let start = resolve_start(cfg, start.as_deref())?;
        let now = today();
        let year = year.unwrap_or(now.year());
        let palette = Palette::for_theme(cfg.is_dark());
        let color = !*no_color;

        match month {
            Some(m) => {
                let grid = MonthGrid::build(year, *m, start, &pattern, now)?;
                println!("{year}");
                print!("{}", render_month(&grid, &palette, color));
                println!(
                    "Off days: {}  On days: {}",
                    grid.count(CyclePhase::Off),
                    grid.count(CyclePhase::On)
                );
            }
            None => {
                print!(
                    "{}",
                    render_year(year, start, &pattern, now, &palette, color)?
                );
            }
        }
    }

    Ok(())
}
