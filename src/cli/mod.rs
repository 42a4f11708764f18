//! Command-line operations module
//!
//! Each operation is one pass over the config file:
//! - list: render the countdown for every entry
//! - add: prompt for a new entry and save it
//! - remove: ask about each entry, remove the confirmed ones
//! - clean: remove entries whose end date has passed

pub mod add;
pub mod clean;
pub mod list;
pub mod prompt;
pub mod remove;
