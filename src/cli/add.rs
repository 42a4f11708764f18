use chrono::NaiveDate;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::cli::prompt::Prompter;
use crate::config::{self, EventRecord};
use crate::error::Result;

/// Interactively add an entry and return its id
pub fn run<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config_path: &Path,
    today: NaiveDate,
) -> Result<String> {
    let mut store = config::load(config_path)?;

    let event = prompter.ask_required("Event name: ")?;
    let start = prompter.ask_date(
        &format!("Start date (YYYY-MM-DD) [{}]: ", today.format("%Y-%m-%d")),
        Some(today),
    )?;
    let end = prompter.ask_date("End date (YYYY-MM-DD): ", None)?;

    if end < start {
        log::warn!("'{}' ends before it starts and will not be displayed", event);
    }

    let id = store.insert(EventRecord::new(event.clone(), start, end));
    config::save(&store, config_path)?;

    writeln!(prompter.out(), "Added \"{}\" ({})", event, id)?;
    Ok(id)
}
