//! JSON document persistence for the planner, the to-do list and the
//! user city table.

use crate::errors::{AppError, AppResult};
use crate::utils::path::quarantine;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of reading a JSON document from disk.
#[derive(Debug)]
pub enum Loaded<T> {
    /// File present and decoded.
    Existing(T),
    /// No file yet.
    Missing,
    /// File could not be decoded and was moved to the given path.
    Quarantined(PathBuf),
}

impl<T> Loaded<T> {
    /// Unwrap to the document or build the fallback.
    pub fn or_else_default(self, fallback: impl FnOnce() -> T) -> T {
        match self {
            Loaded::Existing(v) => v,
            Loaded::Missing | Loaded::Quarantined(_) => fallback(),
        }
    }
}

/// Read `path`. A file that does not decode is renamed to `*.corrupt` so the
/// caller can carry on with defaults without overwriting the user's data.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> AppResult<Loaded<T>> {
    if !path.exists() {
        return Ok(Loaded::Missing);
    }

    let bytes = fs::read(path)?;
    match serde_json::from_slice::<T>(&bytes) {
        Ok(v) => Ok(Loaded::Existing(v)),
        Err(_) => {
            let moved = quarantine(path)?;
            Ok(Loaded::Quarantined(moved))
        }
    }
}

/// Read `path` and fail on any decoding problem. Used for explicit imports.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Storage(format!("{}: {}", path.display(), e)))?;
    let value = serde_json::from_str(&content)
        .map_err(|e| AppError::Storage(format!("{}: {}", path.display(), e)))?;
    Ok(value)
}

/// Write `value` as pretty JSON. The document is written next to the target
/// and renamed into place so a crash never leaves half a file.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(value)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
