//! Data models module
//!
//! Date interval arithmetic shared by listing, cleaning and rendering.
//! Includes days_between, Progress, IntervalError.

pub mod interval;

pub use interval::{days_between, IntervalError, Progress};
