use crate::db::migrate::applied_versions;
use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) READINGS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM inr_readings", [], |row| row.get(0))?;
    println!(
        "{}• INR readings:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) DATE RANGE
    //
    let range: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row(
            "SELECT MIN(date), MAX(date) FROM inr_readings",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    match range {
        Some((Some(first), Some(last))) => {
            println!("{}• Range:{} {} → {}", CYAN, RESET, first, last);
        }
        _ => println!("{}• Range:{} {}none{}", CYAN, RESET, GREY, RESET),
    }

    //
    // 4) LOG + MIGRATIONS
    //
    let log_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log entries:{} {}", CYAN, RESET, log_rows);

    let versions = applied_versions(&pool.conn)?;
    println!("{}• Migrations:{} {}", CYAN, RESET, versions.len());
    for v in versions {
        println!("    {}{}{}", GREY, v, RESET);
    }

    println!();
    Ok(())
}
