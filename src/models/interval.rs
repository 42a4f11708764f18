use chrono::NaiveDate;
use thiserror::Error;

/// Reasons an entry's interval cannot be displayed
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalError {
    #[error("Start date after end date.")]
    EndBeforeStart,

    #[error("Event has not started yet.")]
    NotStarted,
}

/// Signed number of whole days from `a` to `b` (`b - a`)
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    b.signed_duration_since(a).num_days()
}

/// Countdown figures for one entry on a given day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Days from start to end
    pub total: i64,
    /// Days from start to today
    pub elapsed: i64,
    /// Days from today to end (negative once the event is over)
    pub remaining: i64,
    /// Percentage of the span already passed, rounded to one decimal
    pub percent: f64,
}

impl Progress {
    /// Compute progress of `[start, end]` as seen from `today`.
    ///
    /// Both spans are measured from `start`; a negative span is an input
    /// error and the entry is not displayed.
    pub fn compute(
        start: NaiveDate,
        end: NaiveDate,
        today: NaiveDate,
    ) -> Result<Self, IntervalError> {
        let total = days_between(start, end);
        if total < 0 {
            return Err(IntervalError::EndBeforeStart);
        }

        let elapsed = days_between(start, today);
        if elapsed < 0 {
            return Err(IntervalError::NotStarted);
        }

        Ok(Self {
            total,
            elapsed,
            remaining: total - elapsed,
            percent: percent_complete(elapsed, total),
        })
    }

    /// Whether the end date has been reached
    pub fn is_complete(&self) -> bool {
        self.percent >= 100.0
    }
}

/// `round(100 * elapsed / total, 1)`; a zero-length span counts as complete
fn percent_complete(elapsed: i64, total: i64) -> f64 {
    if total == 0 {
        return 100.0;
    }
    (1000.0 * elapsed as f64 / total as f64).round() / 10.0
}
