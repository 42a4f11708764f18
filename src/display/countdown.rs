//! Countdown view for a single entry
//!
//! Renders the framed header, the start/current/end dates, day counts and a
//! fixed-width progress bar.

use chrono::NaiveDate;

use crate::config::EventRecord;
use crate::display::Theme;
use crate::models::Progress;

const BAR_WIDTH: usize = 20;
const FILL_CHAR: char = '▓';
const EMPTY_CHAR: char = '░';
const WARN_DAYS: i64 = 10;
const DATE_FORMAT: &str = "%b %d, %Y";

/// Renders entries as text blocks for the terminal
pub struct CountdownRenderer<'a> {
    theme: &'a Theme,
    compress: bool,
}

impl<'a> CountdownRenderer<'a> {
    pub fn new(theme: &'a Theme, compress: bool) -> Self {
        Self { theme, compress }
    }

    /// Render one entry as seen on `today`
    pub fn render(&self, record: &EventRecord, today: NaiveDate) -> String {
        let mut output = self.render_header(&record.event);

        match Progress::compute(record.dates.start, record.dates.end, today) {
            Ok(progress) => {
                output.push_str(&self.render_dates(record, today));
                self.push_gap(&mut output);
                output.push_str(&self.render_counts(&progress));
                self.push_gap(&mut output);
                output.push_str(&self.render_bar(&progress));
            }
            Err(e) => {
                log::warn!("skipping '{}': {}", record.event, e);
                let message = format!("ERROR: {}", e);
                output.push_str(&self.theme.paint_bold(&message, self.theme.error));
                output.push('\n');
            }
        }

        output.push('\n');
        output
    }

    /// Event name framed in a `#` block
    fn render_header(&self, title: &str) -> String {
        let block = "#".repeat(title.chars().count() + 4);
        let framed = format!("{}\n# {} #\n{}", block, title, block);
        format!("{}\n\n", self.theme.paint_bold(&framed, self.theme.header))
    }

    fn render_dates(&self, record: &EventRecord, today: NaiveDate) -> String {
        [
            ("Start Date:", record.dates.start),
            ("Current Date:", today),
            ("End Date:", record.dates.end),
        ]
        .iter()
        .map(|(label, date)| self.line(label, &date.format(DATE_FORMAT).to_string()))
        .collect()
    }

    fn render_counts(&self, progress: &Progress) -> String {
        let mut output = self.line("Days Passed:", &progress.elapsed.to_string());

        let remaining = if progress.remaining <= 0 {
            "None".to_string()
        } else if progress.remaining <= WARN_DAYS {
            self.theme
                .paint_bold(&format!("{}!", progress.remaining), self.theme.warning)
        } else {
            progress.remaining.to_string()
        };
        output.push_str(&self.line("Days Remaining:", &remaining));

        output
    }

    fn render_bar(&self, progress: &Progress) -> String {
        if progress.is_complete() {
            return format!("{}\n", self.theme.paint_bold("COMPLETE", self.theme.progress));
        }

        let bar = progress_bar(progress.percent);
        format!(
            "{} {:.1}%\n",
            self.theme.paint(&bar, self.theme.progress),
            progress.percent
        )
    }

    fn line(&self, label: &str, value: &str) -> String {
        format!("{}\n", self.theme.paint(&format!("{:<21}{}", label, value), self.theme.text))
    }

    fn push_gap(&self, output: &mut String) {
        if !self.compress {
            output.push('\n');
        }
    }
}

/// Fixed-width bar filled in proportion to `percent`
fn progress_bar(percent: f64) -> String {
    let filled = (percent / 100.0 * BAR_WIDTH as f64).round().max(0.0) as usize;
    let filled = filled.min(BAR_WIDTH);
    let mut bar = String::with_capacity(BAR_WIDTH * FILL_CHAR.len_utf8());
    bar.extend(std::iter::repeat(FILL_CHAR).take(filled));
    bar.extend(std::iter::repeat(EMPTY_CHAR).take(BAR_WIDTH - filled));
    bar
}
