use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, force } = cmd {
        let dest = Path::new(file);
        let files = BackupLogic::backup(cfg, dest, *force)?;

        for f in &files {
            println!("  📦 {}", f.display());
        }
        success(format!(
            "Backup created: {} ({} file(s))",
            dest.display(),
            files.len()
        ));

        audit(
            cfg,
            "backup",
            file,
            &format!("Backup of {} file(s) created", files.len()),
        );
    }

    Ok(())
}
