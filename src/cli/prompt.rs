use chrono::NaiveDate;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::{DaysUntilError, Result};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Line-based question/answer over any reader and writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

/// Prompter bound to the process's stdin and stdout
pub fn stdio() -> Prompter<StdinLock<'static>, Stdout> {
    Prompter::new(io::stdin().lock(), io::stdout())
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for non-interactive output
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Ask once and return the trimmed answer
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            writeln!(self.output)?;
            return Err(DaysUntilError::Input(
                "input closed before an answer was given".to_string(),
            ));
        }

        Ok(answer.trim().to_string())
    }

    /// Ask until the answer is not blank
    pub fn ask_required(&mut self, prompt: &str) -> Result<String> {
        loop {
            let answer = self.ask(prompt)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            writeln!(self.output, "A value is required.")?;
        }
    }

    /// Ask for a `YYYY-MM-DD` date; a blank answer yields `default` when given
    pub fn ask_date(&mut self, prompt: &str, default: Option<NaiveDate>) -> Result<NaiveDate> {
        loop {
            let answer = self.ask(prompt)?;
            if answer.is_empty() {
                match default {
                    Some(date) => return Ok(date),
                    None => {
                        writeln!(self.output, "A date is required.")?;
                        continue;
                    }
                }
            }

            match NaiveDate::parse_from_str(&answer, DATE_INPUT_FORMAT) {
                Ok(date) => return Ok(date),
                Err(_) => writeln!(self.output, "Dates must look like 2024-12-31.")?,
            }
        }
    }

    /// Yes/no question defaulting to no
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let answer = self.ask(&format!("{} [y/N] ", prompt))?;
            match answer.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "" | "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please answer y or n.")?,
            }
        }
    }
}
