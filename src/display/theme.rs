//! Colours used by the countdown view

use std::io::IsTerminal;

use termimad::crossterm::style::{Color, Stylize};

/// Colour choices handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub header: Color,
    pub text: Color,
    pub progress: Color,
    pub warning: Color,
    pub error: Color,
    /// Emit ANSI styling at all
    pub colored: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header: Color::Blue,
            text: Color::White,
            progress: Color::Green,
            warning: Color::Red,
            error: Color::Red,
            colored: true,
        }
    }
}

impl Theme {
    /// Default palette for stdout, coloured only when the environment allows it
    pub fn detect() -> Self {
        Self {
            colored: colors_enabled(std::io::stdout().is_terminal()),
            ..Self::default()
        }
    }

    /// Default palette for messages written to stderr
    pub fn detect_stderr() -> Self {
        Self {
            colored: colors_enabled(std::io::stderr().is_terminal()),
            ..Self::default()
        }
    }

    /// Default palette with styling switched off
    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            colored: false,
            ..Self::default()
        }
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.colored {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn paint_bold(&self, text: &str, color: Color) -> String {
        if self.colored {
            text.with(color).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// NO_COLOR wins, then CLICOLOR_FORCE, then CLICOLOR=0, then whether the
/// target stream is a terminal
fn colors_enabled(is_terminal: bool) -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if let Ok(val) = std::env::var("CLICOLOR_FORCE") {
        if val != "0" {
            return true;
        }
    }

    if std::env::var("CLICOLOR").is_ok_and(|val| val == "0") {
        return false;
    }

    is_terminal
}
