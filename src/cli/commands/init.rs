use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::schedule::ScheduleLogic;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped with `--test`)
///  - the data directory with a default planner
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.data_dir.clone(), cli.test)?;
    let db_path = cfg.database_path();

    println!("⚙️  Initializing hometools…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("📁 Data dir    : {}", cfg.data_path().display());
    println!("🗄️  Database    : {}", db_path.display());

    let pool = DbPool::open(&cfg)?;
    success(format!("Database initialized at {}", db_path.display()));

    let schedule_file = cfg.schedule_file();
    if !schedule_file.exists() {
        ScheduleLogic::load(&schedule_file)?.save()?;
        success(format!("Default planner written to {}", schedule_file.display()));
    }

    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        &db_path.to_string_lossy(),
        "hometools initialized",
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    println!("🎉 hometools initialization completed!");
    Ok(())
}
