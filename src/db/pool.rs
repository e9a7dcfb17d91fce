//! SQLite connection wrapper (lightweight for CLI usage).

use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::{Connection, Result};
use std::fs;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Open the configured database, creating its directory and bringing the
    /// schema up to date.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let path = cfg.database_path();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let pool = Self::new(&path.to_string_lossy())?;
        run_pending_migrations(&pool.conn)?;
        Ok(pool)
    }

    /// In-memory database with the full schema, for tests and dry runs.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }
}
