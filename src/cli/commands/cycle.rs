use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::cycle::{CyclePattern, describe, parse_start_date};
use crate::core::schedule::ScheduleLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::date::{format_long, today};
use crate::utils::formatting::bold;
use chrono::NaiveDate;

/// Cycle start: `--start`, else the planner's start date, else today.
pub(crate) fn resolve_start(cfg: &Config, start: Option<&str>) -> AppResult<NaiveDate> {
    if let Some(s) = start {
        return parse_start_date(s);
    }
    let planner = ScheduleLogic::load(&cfg.schedule_file())?;
    Ok(planner.start_date()?.unwrap_or_else(today))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Cycle { start, days, on } = cmd {
        let pattern = CyclePattern::from_config(&cfg.cycle)?;
        let start = resolve_start(cfg, start.as_deref())?;

        if let Some(on) = on {
            let date = parse_start_date(on)?;
            println!("{}", describe(&pattern.day(date, start)));
            return Ok(());
        }

        header(format!(
            "{}-Off / {}-On cycle from {}",
            pattern.off_days,
            pattern.on_days,
            format_long(start)
        ));
        for day in pattern.lookahead(start, *days)? {
            let line = describe(&day);
            if day.phase.is_off() {
                println!("{}", bold(&line));
            } else {
                println!("{line}");
            }
        }

        let now = today();
        let next = pattern.next_off_start(now, start)?;
        if next == now {
            info("An off block starts today.");
        } else {
            info(format!("Next off block starts {}", format_long(next)));
        }
    }

    Ok(())
}
