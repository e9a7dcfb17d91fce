//! Detect and fill configuration keys that older config files lack.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let value: Value = serde_yaml::from_str(&content)?;
    match value {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

fn defaults_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Other("default config is not a mapping".into())),
    }
}

/// Walk `defaults` and record every key missing from `current`, using
/// dotted paths for nested sections (`weather.api_url`).
fn collect_missing(current: &Mapping, defaults: &Mapping, prefix: &str, out: &mut Vec<String>) {
    for (key, default_val) in defaults {
        let name = match key.as_str() {
            Some(k) if prefix.is_empty() => k.to_string(),
            Some(k) => format!("{prefix}.{k}"),
            None => continue,
        };

        match (current.get(key), default_val) {
            (None, _) => out.push(name),
            (Some(Value::Mapping(cur)), Value::Mapping(def)) => {
                collect_missing(cur, def, &name, out)
            }
            _ => {}
        }
    }
}

fn fill_missing(current: &mut Mapping, defaults: &Mapping) {
    for (key, default_val) in defaults {
        match current.get_mut(key) {
            None => {
                current.insert(key.clone(), default_val.clone());
            }
            Some(Value::Mapping(cur)) => {
                if let Value::Mapping(def) = default_val {
                    fill_missing(cur, def);
                }
            }
            Some(_) => {}
        }
    }
}

/// List the keys the config file at `path` is missing.
pub fn check_config(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = defaults_mapping()?;
    let mut missing = Vec::new();
    collect_missing(&current, &defaults, "", &mut missing);
    Ok(missing)
}

/// Add every missing key with its default value.
/// Returns `true` when the file was rewritten.
pub fn migrate_config(path: &Path) -> AppResult<bool> {
    let missing = check_config(path)?;
    if missing.is_empty() {
        info("Configuration is up to date.");
        return Ok(false);
    }

    let mut current = read_mapping(path)?;
    let defaults = defaults_mapping()?;
    fill_missing(&mut current, &defaults);

    let yaml = serde_yaml::to_string(&Value::Mapping(current))?;
    fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;

    success(format!(
        "Configuration migrated, added: {}",
        missing.join(", ")
    ));
    Ok(true)
}
