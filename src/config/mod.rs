//! Configuration module
//!
//! Handles locating, loading and saving the days_until.toml event store.
//! Defines Store, EventRecord, and Dates types.

mod paths;
mod types;

pub use paths::config_path;
#[allow(unused_imports)]
pub use types::{Dates, EventRecord, Store};

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Load the event store, creating an empty file on first run
pub fn load(path: &Path) -> Result<Store> {
    if !path.exists() {
        create_empty(path)?;
        println!("Created config at: {}", path.display());
        return Ok(Store::new());
    }

    let content = fs::read_to_string(path)?;
    let store: Store = toml::from_str(&content)?;
    store.validate()?;

    log::debug!("loaded {} entries from {}", store.len(), path.display());
    Ok(store)
}

/// Save the event store, replacing the file in one rename
pub fn save(store: &Store, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(store)?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    // Temp file must live on the same filesystem for the rename
    let temp_path = path.with_extension("toml.tmp");
    fs::write(&temp_path, toml)?;
    fs::rename(&temp_path, path)?;

    log::debug!("saved {} entries to {}", store.len(), path.display());
    Ok(())
}

fn create_empty(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, "")?;
    log::info!("created empty config at {}", path.display());
    Ok(())
}
