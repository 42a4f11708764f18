use chrono::NaiveDate;
use std::io::Write;
use std::path::Path;

use crate::config;
use crate::display::{CountdownRenderer, Theme};
use crate::error::{DaysUntilError, Result};

/// Print the countdown for every entry
pub fn run<W: Write>(
    out: &mut W,
    config_path: &Path,
    theme: &Theme,
    compress: bool,
    today: NaiveDate,
) -> Result<()> {
    let store = config::load(config_path)?;
    if store.is_empty() {
        return Err(DaysUntilError::EmptyConfig(config_path.to_path_buf()));
    }

    let renderer = CountdownRenderer::new(theme, compress);
    for (_, record) in store.iter() {
        write!(out, "{}", renderer.render(record, today))?;
    }

    Ok(())
}
