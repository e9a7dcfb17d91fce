use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Fail unless `path` may be written: it is new, `force` is set, or the user
/// confirms on stdin.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }
    confirm_overwrite(path, &mut io::stdin().lock())
}

/// Only `y` / `yes` (any case) accepts; EOF counts as no.
fn confirm_overwrite(path: &Path, input: &mut impl BufRead) -> AppResult<()> {
    warning(format!("'{}' already exists.", path.display()));
    print!("Overwrite it? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Existing file will be replaced.");
            Ok(())
        }
        _ => Err(AppError::Export(format!(
            "cancelled, '{}' was left untouched",
            path.display()
        ))),
    }
}
