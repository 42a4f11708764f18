use std::io::{BufRead, Write};
use std::path::Path;

use crate::cli::prompt::Prompter;
use crate::config::{self, Store};
use crate::error::{DaysUntilError, Result};

/// Outcome of a remove or clean pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    /// Nothing was selected, the file was left alone
    NothingSelected,
    /// The final confirmation was declined
    Aborted,
    /// These ids were removed and the store was saved
    Removed(Vec<String>),
}

/// Ask about every entry, then remove the ones marked after a final confirmation
pub fn run<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config_path: &Path,
) -> Result<Removal> {
    let store = config::load(config_path)?;
    if store.is_empty() {
        return Err(DaysUntilError::EmptyConfig(config_path.to_path_buf()));
    }

    let mut marked = Vec::new();
    for (id, record) in store.iter() {
        if prompter.confirm(&format!("Remove \"{}\"?", record.event))? {
            marked.push(id.clone());
        }
    }

    if marked.is_empty() {
        writeln!(prompter.out(), "Nothing marked for removal.")?;
        return Ok(Removal::NothingSelected);
    }

    confirm_and_save(prompter, store, marked, config_path)
}

/// Show the entries about to go, ask once more and persist what is left
pub(crate) fn confirm_and_save<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    mut store: Store,
    marked: Vec<String>,
    config_path: &Path,
) -> Result<Removal> {
    writeln!(prompter.out(), "\nThe following events will be removed:")?;
    for id in &marked {
        if let Some(record) = store.get(id) {
            writeln!(
                prompter.out(),
                "  - {} ({} to {})",
                record.event,
                record.dates.start,
                record.dates.end
            )?;
        }
    }

    if !prompter.confirm("Proceed?")? {
        writeln!(prompter.out(), "Aborted.")?;
        return Ok(Removal::Aborted);
    }

    store.remove_all(&marked);
    config::save(&store, config_path)?;

    writeln!(prompter.out(), "Removed {} event(s).", marked.len())?;
    Ok(Removal::Removed(marked))
}
