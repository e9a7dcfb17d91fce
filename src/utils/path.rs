//! Path utilities: expand ~ and move damaged files out of the way.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Rename `path` to `<path>.corrupt` and return the new location.
pub fn quarantine(path: &Path) -> io::Result<PathBuf> {
    let mut name = path.as_os_str().to_owned();
    name.push(".corrupt");
    let target = PathBuf::from(name);
    fs::rename(path, &target)?;
    Ok(target)
}
