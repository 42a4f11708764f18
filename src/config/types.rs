use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::error::{DaysUntilError, Result};

/// Length of generated entry ids
const ID_LEN: usize = 8;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A tracked event as persisted in the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventRecord {
    /// Display name
    pub event: String,

    /// Start and end of the countdown
    pub dates: Dates,
}

/// Date range of an event, stored as `YYYY-MM-DD`
///
/// Written back as quoted strings; bare TOML dates are accepted on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dates {
    #[serde(deserialize_with = "deserialize_date")]
    pub start: NaiveDate,
    #[serde(deserialize_with = "deserialize_date")]
    pub end: NaiveDate,
}

/// Accept `"2026-01-12"` as well as a bare local date `2026-01-12`
fn deserialize_date<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    match toml::Value::deserialize(deserializer)? {
        toml::Value::String(s) => NaiveDate::parse_from_str(&s, DATE_FORMAT)
            .map_err(|e| D::Error::custom(format!("invalid date '{}': {}", s, e))),
        toml::Value::Datetime(dt) => match (dt.date, dt.time) {
            (Some(date), None) => {
                NaiveDate::from_ymd_opt(date.year.into(), date.month.into(), date.day.into())
                    .ok_or_else(|| D::Error::custom(format!("invalid date '{}'", dt)))
            }
            _ => Err(D::Error::custom(format!(
                "expected a date without a time, found '{}'",
                dt
            ))),
        },
        other => Err(D::Error::custom(format!(
            "expected a YYYY-MM-DD date, found {}",
            other.type_str()
        ))),
    }
}

impl EventRecord {
    pub fn new(event: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            event: event.into(),
            dates: Dates { start, end },
        }
    }
}

/// All entries of the config file, keyed by id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Store {
    entries: BTreeMap<String, EventRecord>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, id: &str) -> Option<&EventRecord> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Entries in id order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &EventRecord)> {
        self.entries.iter()
    }

    /// Insert under a fresh random id and return the id
    pub fn insert(&mut self, record: EventRecord) -> String {
        self.insert_with(record, generate_id)
    }

    /// Insert under the first id from `next_id` that is not already taken
    pub fn insert_with<F>(&mut self, record: EventRecord, mut next_id: F) -> String
    where
        F: FnMut() -> String,
    {
        loop {
            let id = next_id();
            if self.contains(&id) {
                log::debug!("generated id {} already in use, retrying", id);
                continue;
            }
            self.entries.insert(id.clone(), record);
            return id;
        }
    }

    /// Drop every entry whose id is in `ids`
    pub fn remove_all<'a, I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = &'a String>,
    {
        for id in ids {
            self.entries.remove(id);
        }
    }

    /// Check record invariants the deserializer cannot express
    pub fn validate(&self) -> Result<()> {
        for (id, record) in &self.entries {
            if record.event.trim().is_empty() {
                return Err(DaysUntilError::ConfigParse(format!(
                    "entry '{}' has an empty event name",
                    id
                )));
            }
        }
        Ok(())
    }
}

/// Random id taken from a v4 UUID
fn generate_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(ID_LEN);
    id
}
