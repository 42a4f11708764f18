use chrono::NaiveDate;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::cli::prompt::Prompter;
use crate::cli::remove::{confirm_and_save, Removal};
use crate::config;
use crate::error::{DaysUntilError, Result};
use crate::models::days_between;

/// Remove entries whose end date is today or earlier, after confirmation
pub fn run<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config_path: &Path,
    today: NaiveDate,
) -> Result<Removal> {
    let store = config::load(config_path)?;
    if store.is_empty() {
        return Err(DaysUntilError::EmptyConfig(config_path.to_path_buf()));
    }

    let expired: Vec<String> = store
        .iter()
        .filter(|(_, record)| days_between(record.dates.end, today) >= 0)
        .map(|(id, _)| id.clone())
        .collect();

    if expired.is_empty() {
        writeln!(prompter.out(), "No expired events.")?;
        return Ok(Removal::NothingSelected);
    }

    confirm_and_save(prompter, store, expired, config_path)
}
