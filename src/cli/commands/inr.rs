use crate::cli::parser::{Commands, InrAction};
use crate::config::Config;
use crate::core::inr::{InrLogic, chart, parse_reading_date, parse_value, stats};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::models::reading::{InrStatus, TimeRange};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{RESET, color_for_inr};
use crate::utils::date::{format_iso, today};
use crate::utils::table::Table;
use std::path::PathBuf;

fn log_op(pool: &DbPool, op: &str, target: &str, msg: &str) {
    if let Err(e) = ttlog(&pool.conn, op, target, msg) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

fn print_alert(value: f64, status: InrStatus, cfg: &Config) {
    let range = format!("{:.1}-{:.1}", cfg.inr.low, cfg.inr.high);
    match status {
        InrStatus::Low => warning(format!(
            "Low INR: your INR value ({value}) is below the therapeutic range ({range}). Consider consulting your healthcare provider."
        )),
        InrStatus::High => warning(format!(
            "High INR: your INR value ({value}) is above the therapeutic range ({range}). Consider consulting your healthcare provider."
        )),
        InrStatus::Normal => success(format!(
            "Normal INR: your INR value ({value}) is within the therapeutic range ({range})."
        )),
    }
}

fn range_note(range: TimeRange) -> String {
    match range {
        TimeRange::All => String::new(),
        r => format!(" (last {})", r.label()),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Inr { action } = cmd else {
        return Ok(());
    };

    let pool = DbPool::open(cfg)?;

    match action {
        InrAction::Add { value, date, notes } => {
            let v = parse_value(value)?;
            let d = parse_reading_date(date.as_deref())?;
            let (id, status) = InrLogic::add(&pool, &cfg.inr, d, v, notes)?;
            info(format!("Reading #{id} saved for {}", format_iso(d)));
            print_alert(v, status, cfg);
            log_op(&pool, "add", "inr", &format!("{} {} ({})", format_iso(d), v, status.label()));
        }

        InrAction::List { range } => {
            let rows = InrLogic::list(&pool, *range, today())?;
            if rows.is_empty() {
                info(format!("No INR readings{}.", range_note(*range)));
                return Ok(());
            }

            let mut table = Table::with_headers(&["ID", "Date", "INR", "Status", "Notes"]);
            for r in &rows {
                let status = InrStatus::classify(r.value, cfg.inr.low, cfg.inr.high);
                table.add_row(vec![
                    r.id.to_string(),
                    format_iso(r.date),
                    format!("{:.2}", r.value),
                    status.label().to_string(),
                    r.notes.clone(),
                ]);
            }
            header(format!("INR readings{}", range_note(*range)));
            print!("{}", table.render());
        }

        InrAction::Delete { id, date, value } => {
            let n = match (id, date, value) {
                (Some(id), _, _) => InrLogic::delete_by_id(&pool, *id)?,
                (None, Some(d), Some(v)) => {
                    let d = parse_reading_date(Some(d))?;
                    let v = parse_value(v)?;
                    InrLogic::delete_matching(&pool, d, v)?
                }
                _ => {
                    warning("Please select a record to delete: pass --id or --date with --value.");
                    return Ok(());
                }
            };

            if n == 0 {
                info("No matching readings.");
            } else {
                success(format!("Deleted {n} reading(s)"));
                log_op(&pool, "del", "inr", &format!("{n} reading(s) deleted"));
            }
        }

        InrAction::Stats { range } => {
            let rows = InrLogic::list(&pool, *range, today())?;
            let s = stats(&rows, &cfg.inr);
            header(format!("INR statistics{}", range_note(*range)));
            if s.count == 0 {
                info("No readings.");
                return Ok(());
            }
            println!("Readings : {}", s.count);
            println!("Min      : {:.2}", s.min);
            println!("Max      : {:.2}", s.max);
            println!("Mean     : {:.2}", s.mean);
            if let Some(l) = &s.latest {
                let in_range = InrStatus::classify(l.value, cfg.inr.low, cfg.inr.high)
                    == InrStatus::Normal;
                println!(
                    "Latest   : {}{:.2}{} on {}",
                    color_for_inr(in_range),
                    l.value,
                    RESET,
                    format_iso(l.date)
                );
            }
            println!(
                "In range : {} of {} ({:.0}%) [{:.1}-{:.1}]",
                s.in_range,
                s.count,
                s.in_range_pct(),
                cfg.inr.low,
                cfg.inr.high
            );
        }

        InrAction::Chart { range } => {
            let rows = InrLogic::list_asc(&pool, *range, today())?;
            header(format!("INR chart{}", range_note(*range)));
            print!("{}", chart(&rows, &cfg.inr));
            if rows.is_empty() {
                println!();
            }
        }

        InrAction::Export {
            format,
            file,
            range,
            force,
        } => {
            let path = PathBuf::from(
                file.clone()
                    .unwrap_or_else(|| ExportFormat::default_file(format)),
            );
            let n = ExportLogic::export_readings(&pool, *format, &path, *range, today(), *force)?;
            log_op(
                &pool,
                "export",
                &path.to_string_lossy(),
                &format!("{n} reading(s) as {}", format.as_str()),
            );
        }
    }

    Ok(())
}
