//! Config file location
//!
//! Resolution order:
//! 1. `DAYS_UNTIL_CONFIG` environment variable (full path to the file)
//! 2. `$XDG_CONFIG_HOME/days_until.toml`
//! 3. `~/.config/days_until.toml`
//!
//! The file is TOML, one table per event keyed by id. Dates may be written
//! quoted (`start = "2026-01-12"`) or as bare TOML dates; they are saved back
//! quoted.

use directories::BaseDirs;
use std::path::PathBuf;

use crate::error::{DaysUntilError, Result};

const CONFIG_FILE_NAME: &str = "days_until.toml";

/// Resolve the path of the config file
pub fn config_path() -> Result<PathBuf> {
    if let Some(custom) = non_empty_var("DAYS_UNTIL_CONFIG") {
        return Ok(PathBuf::from(custom));
    }

    let config_base = match non_empty_var("XDG_CONFIG_HOME") {
        Some(xdg) => PathBuf::from(xdg),
        None => BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(".config"))
            .ok_or_else(|| {
                DaysUntilError::Config("Could not determine home directory".to_string())
            })?,
    };

    Ok(config_base.join(CONFIG_FILE_NAME))
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
