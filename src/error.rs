use std::path::PathBuf;

use thiserror::Error;

use crate::models::IntervalError;

/// days_until error types
#[derive(Error, Debug)]
pub enum DaysUntilError {
    #[error("Config was unparsable. Make sure it is properly formatted: {0}")]
    ConfigParse(String),

    #[error("No data in config: {}", .0.display())]
    EmptyConfig(PathBuf),

    #[error("{0}")]
    Interval(#[from] IntervalError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl From<toml::de::Error> for DaysUntilError {
    fn from(err: toml::de::Error) -> Self {
        DaysUntilError::ConfigParse(err.to_string())
    }
}

/// Result type for days_until operations
pub type Result<T> = std::result::Result<T, DaysUntilError>;
