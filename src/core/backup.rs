use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Every data file that currently exists.
    pub fn collect_files(cfg: &Config) -> Vec<PathBuf> {
        [
            cfg.database_path(),
            cfg.schedule_file(),
            cfg.tasks_file(),
            cfg.cities_file(),
            cfg.last_city_file(),
            cfg.favorites_file(),
            Config::config_file(),
        ]
        .into_iter()
        .filter(|p| p.is_file())
        .collect()
    }

    /// Write a Deflated zip of the data files to `dest`. Refuses to replace an
    /// existing archive unless `force` is set. Returns the archived paths.
    pub fn backup(cfg: &Config, dest: &Path, force: bool) -> AppResult<Vec<PathBuf>> {
        let files = Self::collect_files(cfg);
        if files.is_empty() {
            return Err(AppError::NotFound(format!(
                "no data files under {}",
                cfg.data_path().display()
            )));
        }

        if dest.exists() && !force {
            return Err(AppError::InvalidInput(format!(
                "'{}' already exists (use --force to overwrite)",
                dest.display()
            )));
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file = fs::File::create(dest)?;
        let mut zip = ZipWriter::new(file);
        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        let mut used: Vec<String> = Vec::new();
        for path in &files {
            let mut name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "data".to_string());
            // a custom --db can share a file name with another data file
            if used.contains(&name) {
                name = format!("{}-{}", used.len(), name);
            }
            used.push(name.clone());

            zip.start_file(name, options).map_err(io::Error::other)?;
            let mut f = fs::File::open(path)?;
            io::copy(&mut f, &mut zip)?;
        }

        zip.finish().map_err(io::Error::other)?;
        Ok(files)
    }
}
